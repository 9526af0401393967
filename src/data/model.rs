use chrono::NaiveDate;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Record – one transaction row
// ---------------------------------------------------------------------------

/// A single e-commerce transaction row.  The source data uses localized
/// (Chinese) column names, mapped here via serde renames.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Record {
    #[serde(rename = "日期")]
    pub date: NaiveDate,
    #[serde(rename = "销售额")]
    pub sales_amount: f64,
    #[serde(rename = "订单量")]
    pub order_count: u64,
    #[serde(rename = "客单价")]
    pub avg_order_value: f64,
    #[serde(rename = "商品分类")]
    pub category: String,
    #[serde(rename = "地区")]
    pub region: String,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed date bounds.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// All transaction rows, in file order.
    pub records: Vec<Record>,
    /// Earliest date present in `records`.
    pub min_date: NaiveDate,
    /// Latest date present in `records`.
    pub max_date: NaiveDate,
}

impl Dataset {
    /// Build a dataset from loaded rows.  Returns `None` for an empty row
    /// set, where date bounds would be meaningless.
    pub fn from_records(records: Vec<Record>) -> Option<Self> {
        let min_date = records.iter().map(|r| r.date).min()?;
        let max_date = records.iter().map(|r| r.date).max()?;
        Some(Dataset {
            records,
            min_date,
            max_date,
        })
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
