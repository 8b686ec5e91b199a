//! Plain-text rendering for the terminal.

use super::schema::Report;
use crate::aggregator::DashboardMetrics;
use crate::parser::schema::JoinedRecord;

/// Format an amount as BRL with thousands separators, e.g. `R$ 1,234.56`
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}R$ {}.{:02}", sign, grouped, cents % 100)
}

/// Render the headline metrics block
pub fn render_metrics(metrics: &DashboardMetrics) -> String {
    format!(
        "Total de Processos:            {}\n\
         Total de Honorários Estimados: {}\n\
         Processos Em Andamento:        {}\n\
         Processos Concluídos:          {}",
        metrics.total_cases,
        format_currency(metrics.fee_total),
        metrics.in_progress,
        metrics.concluded
    )
}

/// Render records as an aligned table, or a notice when there are none
pub fn render_records(records: &[JoinedRecord]) -> String {
    if records.is_empty() {
        return "Nenhum processo corresponde ao filtro selecionado.".to_string();
    }

    let mut out = format!(
        "{:<26} {:<24} {:>18} {:<10} {:<16} {:>6} {:>16}",
        "Processo", "Parte Contrária", "Valor da Causa", "Prazo", "Status", "%", "Honorário"
    );
    for r in records {
        out.push('\n');
        out.push_str(&format!(
            "{:<26} {:<24} {:>18} {:<10} {:<16} {:>6.2} {:>16}",
            r.case_id,
            truncate(&r.opposing_party, 24),
            format_currency(r.claim_value),
            r.deadline.format("%Y-%m-%d"),
            truncate(&r.status, 16),
            r.fee_percentage,
            format_currency(r.estimated_fee)
        ));
    }
    out
}

/// Render a full report: filter, metrics, then the record table
pub fn render_report(report: &Report) -> String {
    let mut out = String::new();
    out.push_str(&"=".repeat(80));
    out.push_str("\nPAINEL DE PROCESSOS\n");
    out.push_str(&"=".repeat(80));
    out.push('\n');
    out.push_str(&render_metrics(&report.metrics));
    out.push_str(&format!("\n\nFiltro de status: {}\n", report.filter));
    if let Some(top) = &report.top_values {
        out.push_str(&format!(
            "Maior valor da causa: {} | Maior honorário: {}\n",
            format_currency(top.max_claim_value),
            format_currency(top.max_estimated_fee)
        ));
    }
    out.push('\n');
    out.push_str(&render_records(&report.records));
    out.push('\n');
    out.push_str(&"=".repeat(80));
    out
}

/// Cut a string to `max` characters, marking the cut with an ellipsis
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut cut: String = s.chars().take(max.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}
