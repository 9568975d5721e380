use brandflow_types::{Product, ProductScores};
use std::collections::BTreeMap;

struct ProductBuilder {
    product: Product,
}

impl ProductBuilder {
    fn new(id: u32, name: &str, asin: &str, parent_asin: &str, sku: &str) -> Self {
        Self {
            product: Product {
                id,
                name: name.to_string(),
                asin: asin.to_string(),
                parent_asin: parent_asin.to_string(),
                sku: sku.to_string(),
                brand: "KARACA".to_string(),
                status: "Available".to_string(),
                tags: Vec::new(),
                scores: ProductScores { aps: 0, sps: 0, ups: 0 },
                values: BTreeMap::new(),
                seller_values: BTreeMap::new(),
                vendor_values: BTreeMap::new(),
            },
        }
    }

    fn tags(mut self, tags: &[&str]) -> Self {
        self.product.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    fn scores(mut self, aps: u8, sps: u8, ups: u8) -> Self {
        self.product.scores = ProductScores { aps, sps, ups };
        self
    }

    fn values(mut self, pairs: &[(&str, &str)]) -> Self {
        extend(&mut self.product.values, pairs);
        self
    }

    fn seller(mut self, pairs: &[(&str, &str)]) -> Self {
        extend(&mut self.product.seller_values, pairs);
        self
    }

    fn vendor(mut self, pairs: &[(&str, &str)]) -> Self {
        extend(&mut self.product.vendor_values, pairs);
        self
    }

    fn build(self) -> Product {
        self.product
    }
}

fn extend(map: &mut BTreeMap<String, String>, pairs: &[(&str, &str)]) {
    map.extend(pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())));
}

/// The demo catalog shown in the product table
pub fn sample_products() -> Vec<Product> {
    vec![
        ProductBuilder::new(
            1,
            "Karaca Siena 53-Piece Porcelain Plates and Bowls Set with Dinner & Dessert Plates, Shakers - Bone China Dishware Sets - Kitchen Dinnerware Set for 12 People",
            "B0D2329WRV",
            "-",
            "KRC-SIENA-53",
        )
        .tags(&["Best Seller", "Multi-pack"])
        .scores(78, 65, 72)
        .values(&[
            ("price", "$220.00"),
            ("sales", "$12,068.26"),
            ("profit", "$7,407.39"),
            ("organicSales", "$6,131.00"),
            ("shippedRevenue", "$9,840.00"),
            ("adSales", "$5,937.26"),
            ("adSpend", "$1,098.40"),
            ("acos", "18.5%"),
            ("roas", "5.41"),
            ("impressions", "284,120"),
            ("clicks", "7,955"),
            ("orderCount", "55"),
            ("units", "58"),
            ("shippedUnits", "44"),
            ("productCost", "$0.00"),
            ("fbaFee", "$1,131.64"),
            ("referralFee", "$1,690.47"),
            ("totalFees", "$2,822.11"),
            ("buyBoxPercent", "98.2%"),
            ("vendorConfirmationRate", "94.0%"),
            ("sessions", "31,253"),
            ("pageViews", "45,459"),
            ("availableQuantity", "412"),
            ("sellableOnHand", "236"),
        ])
        .seller(&[
            ("sales", "$7,241.00"),
            ("adSales", "$3,562.36"),
            ("adSpend", "$659.04"),
            ("units", "35"),
            ("clicks", "4,773"),
            ("sessions", "18,752"),
            ("pageViews", "27,275"),
        ])
        .vendor(&[
            ("sales", "$4,827.26"),
            ("adSales", "$2,374.90"),
            ("adSpend", "$439.36"),
            ("units", "23"),
            ("clicks", "3,182"),
            ("sessions", "12,501"),
            ("pageViews", "18,184"),
        ])
        .build(),
        ProductBuilder::new(
            2,
            "Karaca New Flava 24 Piece Porcelain Dinnerware Set for 6 People, Elegant Porcelain Dishware with Dinner, Pasta, Side Plates, Bowls, Kitchen Essentials: Durable, Resistant, Ideal for Dinner Serving",
            "B0CHC1VXH",
            "B0D6YC5XTF",
            "KRC-FLAVA-24",
        )
        .tags(&["Discounted", "New Arrival"])
        .scores(82, 71, 77)
        .values(&[
            ("price", "$137.19"),
            ("sales", "$11,953.96"),
            ("profit", "$7,482.15"),
            ("organicSales", "$4,610.29"),
            ("shippedRevenue", "$10,212.40"),
            ("adSales", "$7,343.67"),
            ("adSpend", "$1,285.14"),
            ("acos", "17.5%"),
            ("roas", "5.71"),
            ("impressions", "251,780"),
            ("clicks", "7,050"),
            ("orderCount", "84"),
            ("units", "87"),
            ("shippedUnits", "74"),
            ("productCost", "$0.00"),
            ("fbaFee", "$1,319.73"),
            ("referralFee", "$1,402.32"),
            ("totalFees", "$2,722.05"),
            ("buyBoxPercent", "97.6%"),
            ("vendorConfirmationRate", "91.5%"),
            ("sessions", "27,696"),
            ("pageViews", "40,285"),
            ("availableQuantity", "268"),
            ("sellableOnHand", "190"),
        ])
        .seller(&[
            ("sales", "$6,574.68"),
            ("adSales", "$4,039.02"),
            ("adSpend", "$706.83"),
            ("units", "48"),
            ("clicks", "3,878"),
            ("sessions", "15,233"),
            ("pageViews", "22,157"),
        ])
        .vendor(&[
            ("sales", "$5,379.28"),
            ("adSales", "$3,304.65"),
            ("adSpend", "$578.31"),
            ("units", "39"),
            ("clicks", "3,172"),
            ("sessions", "12,463"),
            ("pageViews", "18,128"),
        ])
        .build(),
        ProductBuilder::new(
            3,
            "KARACA Hatır Turkish Coffee Maker, 5 Cups Electric Turkish Coffee Machine with Ember Mode, Automatic Temperature Control, Overflow Protection, Audible & Visual Alerts, Shiny Black",
            "B0FPD8BHK3",
            "B0FTT3WRT8",
            "KRC-HATIR-5C",
        )
        .tags(&["Best Seller", "Organic"])
        .scores(91, 84, 88)
        .values(&[
            ("price", "$79.98"),
            ("sales", "$9,918.76"),
            ("profit", "$6,499.66"),
            ("organicSales", "$5,199.39"),
            ("shippedRevenue", "$8,730.05"),
            ("adSales", "$4,719.37"),
            ("adSpend", "$778.70"),
            ("acos", "16.5%"),
            ("roas", "6.06"),
            ("impressions", "198,430"),
            ("clicks", "5,556"),
            ("orderCount", "121"),
            ("units", "124"),
            ("shippedUnits", "109"),
            ("productCost", "$0.00"),
            ("fbaFee", "$1,465.16"),
            ("referralFee", "$1,344.00"),
            ("totalFees", "$2,809.16"),
            ("buyBoxPercent", "99.1%"),
            ("vendorConfirmationRate", "96.2%"),
            ("sessions", "21,827"),
            ("pageViews", "31,749"),
            ("availableQuantity", "530"),
            ("sellableOnHand", "318"),
        ])
        .seller(&[
            ("sales", "$5,951.26"),
            ("adSales", "$2,831.62"),
            ("adSpend", "$467.22"),
            ("units", "74"),
            ("clicks", "3,334"),
            ("sessions", "13,096"),
            ("pageViews", "19,049"),
        ])
        .vendor(&[
            ("sales", "$3,967.50"),
            ("adSales", "$1,887.75"),
            ("adSpend", "$311.48"),
            ("units", "50"),
            ("clicks", "2,222"),
            ("sessions", "8,731"),
            ("pageViews", "12,700"),
        ])
        .build(),
        ProductBuilder::new(
            4,
            "Karaca Premium Turkish Tea Glass Set with Saucers, 12 Pieces",
            "B09X1RA4K2",
            "B09X1RA4K3",
            "KRC-TEA-12",
        )
        .scores(68, 59, 64)
        .values(&[
            ("price", "$34.99"),
            ("sales", "$5,890.00"),
            ("profit", "$3,245.50"),
            ("organicSales", "$2,890.00"),
            ("shippedRevenue", "$4,975.80"),
            ("adSales", "$3,000.00"),
            ("adSpend", "$672.00"),
            ("acos", "22.4%"),
            ("roas", "4.46"),
            ("impressions", "121,560"),
            ("clicks", "3,404"),
            ("orderCount", "163"),
            ("units", "168"),
            ("shippedUnits", "142"),
            ("productCost", "$0.00"),
            ("fbaFee", "$845.20"),
            ("referralFee", "$799.30"),
            ("totalFees", "$1,644.50"),
            ("buyBoxPercent", "95.4%"),
            ("vendorConfirmationRate", "88.7%"),
            ("sessions", "13,372"),
            ("pageViews", "19,450"),
            ("availableQuantity", "1,120"),
            ("sellableOnHand", "640"),
        ])
        .seller(&[
            ("sales", "$3,534.00"),
            ("adSales", "$1,800.00"),
            ("adSpend", "$403.20"),
            ("units", "101"),
            ("clicks", "2,042"),
            ("sessions", "8,023"),
            ("pageViews", "11,670"),
        ])
        .vendor(&[
            ("sales", "$2,356.00"),
            ("adSales", "$1,200.00"),
            ("adSpend", "$268.80"),
            ("units", "67"),
            ("clicks", "1,362"),
            ("sessions", "5,349"),
            ("pageViews", "7,780"),
        ])
        .build(),
        ProductBuilder::new(
            5,
            "Karaca Bioceramic Non-Stick Frying Pan Set, 3 Pieces",
            "B012Y4RB5X",
            "B012Y4RB5Y",
            "KRC-BIO-PAN3",
        )
        .tags(&["Best Seller"])
        .scores(85, 78, 82)
        .values(&[
            ("price", "$129.99"),
            ("sales", "$8,450.20"),
            ("profit", "$5,120.80"),
            ("organicSales", "$4,225.10"),
            ("shippedRevenue", "$7,183.00"),
            ("adSales", "$4,225.10"),
            ("adSpend", "$802.77"),
            ("acos", "19.0%"),
            ("roas", "5.26"),
            ("impressions", "176,940"),
            ("clicks", "4,954"),
            ("orderCount", "63"),
            ("units", "65"),
            ("shippedUnits", "55"),
            ("productCost", "$0.00"),
            ("fbaFee", "$1,125.40"),
            ("referralFee", "$1,204.00"),
            ("totalFees", "$2,329.40"),
            ("buyBoxPercent", "97.9%"),
            ("vendorConfirmationRate", "92.8%"),
            ("sessions", "19,463"),
            ("pageViews", "28,310"),
            ("availableQuantity", "305"),
            ("sellableOnHand", "174"),
        ])
        .seller(&[
            ("sales", "$5,070.12"),
            ("adSales", "$2,535.06"),
            ("adSpend", "$481.66"),
            ("units", "39"),
            ("clicks", "2,972"),
            ("sessions", "11,678"),
            ("pageViews", "16,986"),
        ])
        .vendor(&[
            ("sales", "$3,380.08"),
            ("adSales", "$1,690.04"),
            ("adSpend", "$321.11"),
            ("units", "26"),
            ("clicks", "1,982"),
            ("sessions", "7,785"),
            ("pageViews", "11,324"),
        ])
        .build(),
    ]
}
