use comfy_table::{Cell, Table};
use serde_json::Value;

use crate::config::EnvTokenProvider;
use crate::lims::LimsClient;

fn field<'a>(center: &'a Value, keys: &[&str]) -> &'a str {
    keys.iter()
        .find_map(|k| center.get(k).and_then(Value::as_str))
        .unwrap_or("-")
}

pub async fn list_centers(client: &LimsClient) -> anyhow::Result<()> {
    let centers = client.fetch_referral_centers(&EnvTokenProvider).await?;

    if centers.is_empty() {
        println!("No referral centers returned.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Center", "City", "Contact"]);
    for center in &centers {
        table.add_row(vec![
            Cell::new(field(center, &["centerName", "name"])),
            Cell::new(field(center, &["city", "location"])),
            Cell::new(field(center, &["phone", "mobile", "contact"])),
        ]);
    }
    println!("{table}");
    println!("\n{} referral center(s).", centers.len());
    Ok(())
}
