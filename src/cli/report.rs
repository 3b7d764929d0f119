use crate::store::ReportStore;
use crate::store::models::NewReport;

pub fn create_report(
    store: &ReportStore,
    title: &str,
    content: &str,
    date: Option<&str>,
    admin: bool,
) -> anyhow::Result<()> {
    let report = NewReport {
        date: date
            .map(String::from)
            .unwrap_or_else(|| chrono::Utc::now().to_rfc3339()),
        title: title.to_string(),
        content: content.to_string(),
    };

    let stored = if admin {
        store.create_admin_report(&report)
    } else {
        store.create_report(&report)
    };

    if stored {
        println!("Report archived.");
    } else {
        // Best-effort contract: false means the write could not be
        // confirmed, not necessarily that nothing was written.
        println!("Report could not be archived (see log).");
    }
    Ok(())
}

pub fn show_report(store: &ReportStore, id: &str) -> anyhow::Result<()> {
    let report = store.get_report(id)?;
    println!("Id:      {}", report.id);
    println!("Date:    {}", report.date);
    println!("Created: {}", report.created_at);
    println!("Title:   {}", report.title);
    println!("\n{}", report.content);
    Ok(())
}

pub fn delete_report(store: &ReportStore, id: &str) -> anyhow::Result<()> {
    if store.delete_report(id) {
        println!("Report deleted.");
    } else {
        println!("Delete could not be confirmed (see log).");
    }
    Ok(())
}
