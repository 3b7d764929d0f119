use comfy_table::{Cell, Table};
use serde_json::Value;

use crate::error::AppError;
use crate::lims::LimsClient;

/// Best-effort field lookup. Catalog entries are opaque upstream records
/// and the key names vary between tests and profiles.
fn field<'a>(entry: &'a Value, keys: &[&str]) -> &'a str {
    keys.iter()
        .find_map(|k| entry.get(k).and_then(Value::as_str))
        .unwrap_or("-")
}

pub async fn list_catalog(client: &LimsClient, token: Option<&str>) -> anyhow::Result<()> {
    let env_token = std::env::var("LABDESK_CATALOG_TOKEN").ok();
    let token = token
        .map(String::from)
        .or(env_token)
        .ok_or_else(|| AppError::Config("no catalog token (use --token or LABDESK_CATALOG_TOKEN)".into()))?;

    let entries = client.fetch_catalog(&token).await?;

    if entries.is_empty() {
        println!("Catalog is empty.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Name", "Code", "Category"]);
    for entry in &entries {
        table.add_row(vec![
            Cell::new(field(entry, &["testName", "profileName", "name"])),
            Cell::new(field(entry, &["testCode", "profileCode", "code"])),
            Cell::new(field(entry, &["category", "department"])),
        ]);
    }
    println!("{table}");
    println!("\n{} catalog entr(ies).", entries.len());
    Ok(())
}
