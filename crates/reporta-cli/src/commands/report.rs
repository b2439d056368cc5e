use super::{AppContext, app_context, require_session};
use anyhow::{Result, anyhow};
use colored::Colorize;
use reporta_api::{LocationResolver, ReportsClient};
use reporta_application::{ReportInput, ReportService};
use reporta_core::report::{Report, ReportCategory, ReportFilter, ReportStatus};
use std::io::Write;

fn service(ctx: &AppContext) -> ReportService {
    ReportService::new(
        ReportsClient::new(&ctx.config.server_url),
        LocationResolver::new(),
        ctx.session.clone(),
    )
}

fn parse_category(raw: &str) -> Result<ReportCategory> {
    raw.parse::<ReportCategory>().map_err(|_| {
        anyhow!(
            "Unknown category '{}'. Use one of: security, infrastructure, services, behavior, other.",
            raw
        )
    })
}

fn parse_filter(raw: &str) -> Result<ReportFilter> {
    raw.parse::<ReportFilter>().map_err(|_| {
        anyhow!(
            "Unknown filter '{}'. Use one of: all, pending, approved, rejected.",
            raw
        )
    })
}

fn render_status(status: Option<ReportStatus>) -> colored::ColoredString {
    match status {
        Some(ReportStatus::Pending) => "pending".yellow(),
        Some(ReportStatus::Approved) => "approved".green(),
        Some(ReportStatus::Rejected) => "rejected".red(),
        None => "no status".dimmed(),
    }
}

fn render(reports: &[Report]) {
    if reports.is_empty() {
        println!("No reports found for this filter.");
        return;
    }

    for report in reports {
        println!(
            "#{} [{}] {}",
            report.id,
            render_status(report.status),
            report.title.bold()
        );
        println!("    category: {}", report.category);
        println!("    location: {}", report.location);
        println!("    {}", report.description);
    }
}

pub async fn create(
    title: String,
    category: &str,
    description: String,
    location: Option<String>,
) -> Result<()> {
    let ctx = app_context().await?;
    require_session(&ctx).await?;

    let reports = service(&ctx)
        .create(ReportInput {
            title,
            category: parse_category(category)?,
            description,
            location,
        })
        .await?;

    println!("{} Report submitted.", "✓".green());
    render(&reports);
    Ok(())
}

pub async fn list(filter: &str) -> Result<()> {
    let ctx = app_context().await?;
    require_session(&ctx).await?;

    let reports = service(&ctx).list(parse_filter(filter)?).await?;
    render(&reports);
    Ok(())
}

pub async fn update(
    id: i64,
    title: String,
    category: &str,
    description: String,
    location: Option<String>,
) -> Result<()> {
    let ctx = app_context().await?;
    require_session(&ctx).await?;

    let reports = service(&ctx)
        .update(
            id,
            ReportInput {
                title,
                category: parse_category(category)?,
                description,
                location,
            },
        )
        .await?;

    println!("{} Report updated.", "✓".green());
    render(&reports);
    Ok(())
}

pub async fn delete(id: i64, yes: bool) -> Result<()> {
    let ctx = app_context().await?;
    require_session(&ctx).await?;

    if !yes && !confirm(&format!("Delete report {}? This cannot be undone.", id))? {
        println!("Aborted.");
        return Ok(());
    }

    let reports = service(&ctx).delete(id).await?;

    println!("{} Report deleted.", "✓".green());
    render(&reports);
    Ok(())
}

pub async fn approve(id: i64) -> Result<()> {
    let ctx = app_context().await?;
    require_session(&ctx).await?;

    let svc = service(&ctx);
    // Fetch first so the status-based action guard has something to look at
    svc.list(ReportFilter::All).await?;
    if !svc.can_approve(id).await {
        println!("Report {} is already approved.", id);
        return Ok(());
    }

    let reports = svc.approve(id).await?;

    println!("{} Report approved.", "✓".green());
    render(&reports);
    Ok(())
}

pub async fn reject(id: i64) -> Result<()> {
    let ctx = app_context().await?;
    require_session(&ctx).await?;

    let svc = service(&ctx);
    svc.list(ReportFilter::All).await?;
    if !svc.can_reject(id).await {
        println!("Report {} is already rejected.", id);
        return Ok(());
    }

    let reports = svc.reject(id).await?;

    println!("{} Report rejected.", "✓".green());
    render(&reports);
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
