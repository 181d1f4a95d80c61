//! Demo catalog and ledger installed at startup when `seed_demo_data` is on.
//!
//! Ledger figures are installed as listed, not recomputed from the history. `sulfuric-b5`, for
//! one, lists an average of 0.6 while its only purchase was at 0.55; the first append brings the
//! figure back in line.

use chrono::{NaiveDate, NaiveTime};

use crate::model::{
    Material, MaterialTransaction, NewTransaction, Product, StockLedger, NOTEBOOK_CATEGORY,
};

const RING_SUPPLIER: &str = "五金配件厂";
const PAPER_SUPPLIER: &str = "纸业有限公司";

fn day(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).expect("valid seed date")
}

fn notebook(
    id: &str,
    name: &str,
    price: f64,
    stock: u32,
    description: &str,
    created: NaiveDate,
) -> Product {
    Product::new(id, name, NOTEBOOK_CATEGORY, price, stock)
        .with_description(description)
        .with_created_at(created.and_time(NaiveTime::default()).and_utc())
}

pub fn products() -> Vec<Product> {
    vec![
        notebook(
            "1",
            "法棍收纳册",
            89.0,
            50,
            "法式风格收纳册，配2个环扣",
            day(1, 15),
        ),
        notebook(
            "2",
            "A6收纳册",
            45.0,
            100,
            "A6尺寸收纳册，配2个环扣",
            day(1, 20),
        ),
        notebook(
            "3",
            "A7收纳册",
            35.0,
            80,
            "A7尺寸收纳册，配1个环扣",
            day(1, 25),
        ),
        notebook(
            "4",
            "小面包收纳册",
            28.0,
            120,
            "小面包造型收纳册，配1个环扣",
            day(2, 1),
        ),
        notebook(
            "5",
            "TN收纳册",
            75.0,
            60,
            "TN风格收纳册，配2个环扣",
            day(2, 5),
        ),
    ]
}

fn bought(
    id: &str,
    date: NaiveDate,
    quantity: u32,
    unit_price: f64,
    supplier: &str,
) -> MaterialTransaction {
    NewTransaction::inbound(quantity, unit_price, date)
        .supplier(supplier)
        .record(id.into())
}

fn used(
    id: &str,
    date: NaiveDate,
    quantity: u32,
    unit_price: f64,
    order_id: &str,
) -> MaterialTransaction {
    NewTransaction::outbound(quantity, unit_price, date)
        .order_id(order_id)
        .record(id.into())
}

fn ring(
    id: &str,
    name: &str,
    stock: i64,
    sufficient: bool,
    history: Vec<MaterialTransaction>,
) -> Material {
    Material::leaf(
        id,
        name,
        "环扣",
        StockLedger::seeded(stock, 1.2, sufficient, history),
    )
}

pub fn materials() -> Vec<Material> {
    let mut t1 = bought("t1", day(1, 10), 1000, 2.3, "华南塑料厂");
    t1.notes = Some("新年补货".to_string());
    let mut t2 = used("t2", day(1, 15), 500, 2.3, "ORDER001");
    t2.notes = Some("法棍收纳册生产".to_string());
    let mut t4 = used("t4", day(1, 20), 1200, 0.75, "ORDER002");
    t4.notes = Some("A6/A7/法棍/TN收纳册生产".to_string());
    let mut t6 = used("t6", day(1, 25), 700, 0.55, "ORDER003");
    t6.notes = Some("小面包收纳册生产".to_string());
    let mut t8 = used("t8", day(1, 18), 300, 1.1, "ORDER004");
    t8.notes = Some("收纳册配件".to_string());

    vec![
        Material::leaf(
            "plastic-a4",
            "磨砂塑料皮A4",
            "塑料皮",
            StockLedger::seeded(500, 2.5, true, vec![t1, t2]),
        ),
        Material::leaf(
            "sulfuric-a4",
            "硫酸纸A4",
            "硫酸纸",
            StockLedger::seeded(
                800,
                0.8,
                true,
                vec![bought("t3", day(1, 12), 2000, 0.75, PAPER_SUPPLIER), t4],
            ),
        ),
        Material::leaf(
            "sulfuric-b5",
            "硫酸纸B5",
            "硫酸纸",
            StockLedger::seeded(
                300,
                0.6,
                false,
                vec![bought("t5", day(1, 8), 1000, 0.55, PAPER_SUPPLIER), t6],
            ),
        ),
        Material::group(
            "transparent-ring",
            "透明环",
            "环扣",
            vec![
                ring(
                    "ring-pink",
                    "粉色透明环",
                    200,
                    true,
                    vec![bought("t7", day(1, 5), 500, 1.1, RING_SUPPLIER), t8],
                ),
                ring(
                    "ring-blue",
                    "蓝色透明环",
                    150,
                    true,
                    vec![
                        bought("t9", day(1, 5), 400, 1.1, RING_SUPPLIER),
                        used("t10", day(1, 22), 250, 1.1, "ORDER005"),
                    ],
                ),
                ring(
                    "ring-yellow",
                    "黄色透明环",
                    180,
                    true,
                    vec![
                        bought("t11", day(1, 5), 300, 1.1, RING_SUPPLIER),
                        used("t12", day(1, 28), 120, 1.1, "ORDER006"),
                    ],
                ),
                ring(
                    "ring-black",
                    "黑色透明环",
                    220,
                    true,
                    vec![
                        bought("t13", day(1, 5), 400, 1.1, RING_SUPPLIER),
                        used("t14", day(2, 1), 180, 1.1, "ORDER007"),
                    ],
                ),
                ring(
                    "ring-transparent",
                    "透明透明环",
                    100,
                    false,
                    vec![
                        bought("t15", day(1, 5), 200, 1.1, RING_SUPPLIER),
                        used("t16", day(2, 3), 100, 1.1, "ORDER008"),
                    ],
                ),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{find_in_forest, InventoryOverview, MaterialId};

    #[test]
    fn test_seed_ids_are_unique() {
        let forest = materials();
        let mut ids: Vec<String> = forest
            .iter()
            .flat_map(|m| std::iter::once(m).chain(m.children()))
            .map(|m| m.id.0.clone())
            .collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
        assert_eq!(total, 9);
    }

    #[test]
    fn test_seed_histories_replay_to_listed_stock() {
        for leaf in materials().iter().flat_map(Material::leaves) {
            let ledger = leaf.ledger().unwrap();
            assert_eq!(ledger.replay().stock, ledger.stock, "{}", leaf.id);
        }
    }

    #[test]
    fn test_sulfuric_b5_listed_average_differs_from_history() {
        let forest = materials();
        let b5 = find_in_forest(&forest, &MaterialId::from("sulfuric-b5")).unwrap();
        assert_eq!(b5.average_price(), 0.6);
        assert!((b5.ledger().unwrap().replay().average_price - 0.55).abs() < 1e-9);
    }

    #[test]
    fn test_seed_overview() {
        let overview = InventoryOverview::from_forest(&materials());
        assert_eq!(overview.material_count, 8);
        assert_eq!(overview.low_stock_count, 2);
        assert_eq!(overview.categories, ["塑料皮", "硫酸纸", "环扣"]);
    }

    #[test]
    fn test_seed_dates_fall_in_2024() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        for leaf in materials().iter().flat_map(Material::leaves) {
            for tx in leaf.transactions() {
                assert!((start..=end).contains(&tx.date), "{} on {}", tx.id, tx.date);
            }
        }
        for product in products() {
            assert!((start..=end).contains(&product.created_at.date_naive()));
        }
    }

    #[test]
    fn test_seed_products_are_notebooks() {
        let products = products();
        assert_eq!(products.len(), 5);
        assert!(products.iter().all(Product::is_notebook));
        assert_eq!(products[0].created_at.to_rfc3339(), "2024-01-15T00:00:00+00:00");
    }
}
