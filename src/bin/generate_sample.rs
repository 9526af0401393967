//! Writes a deterministic `ecommerce_data.csv` for trying out the dashboard.

use anyhow::{Context, Result};
use chrono::{Datelike, Duration, NaiveDate};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let categories: [(&str, f64); 5] = [
        ("服装", 1800.0),
        ("数码", 2600.0),
        ("家居", 1200.0),
        ("美妆", 900.0),
        ("食品", 700.0),
    ];
    let regions = ["华东", "华北", "华南", "西部"];

    let start = NaiveDate::from_ymd_opt(2024, 1, 1).context("invalid start date")?;
    let days = 90;

    let output_path = "ecommerce_data.csv";
    let mut writer = csv::Writer::from_path(output_path).context("creating output file")?;
    writer
        .write_record(["日期", "销售额", "订单量", "客单价", "商品分类", "地区"])
        .context("writing header")?;

    let mut rows = 0usize;
    for day in 0..days {
        let date = start + Duration::days(day);
        // Weekend traffic bump.
        let weekday_factor = if date.weekday().num_days_from_monday() >= 5 {
            1.3
        } else {
            1.0
        };

        for (cat_idx, &(category, base)) in categories.iter().enumerate() {
            let region = regions[(day as usize + cat_idx) % regions.len()];
            let sales = base * weekday_factor * (0.7 + 0.6 * rng.next_f64());
            let order_count = ((sales / (40.0 + 30.0 * rng.next_f64())).round() as u64).max(1);
            let avg_order_value = sales / order_count as f64;

            writer
                .write_record([
                    date.to_string(),
                    format!("{sales:.2}"),
                    order_count.to_string(),
                    format!("{avg_order_value:.2}"),
                    category.to_string(),
                    region.to_string(),
                ])
                .context("writing row")?;
            rows += 1;
        }
    }

    writer.flush().context("flushing output")?;
    println!("Wrote {rows} rows over {days} days to {output_path}");
    Ok(())
}
