//! Fixed print layout for the strategy, as Markdown.

use std::fmt::Write;

use chrono::NaiveDate;

use super::DocumentRenderer;
use crate::models::StrategyDocument;

const EMPTY: &str = "—";

/// The print-ready document: title block, then six numbered sections.
///
/// Example header:
/// ```text
/// # Маркетинговая Стратегия
///
/// *Моя новая маркетинговая стратегия*
///
/// Дата: 16.10.2026
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PrintLayout {
    date: NaiveDate,
}

impl PrintLayout {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    pub fn today() -> Self {
        Self::new(chrono::Local::now().date_naive())
    }
}

impl DocumentRenderer for PrintLayout {
    fn render(&self, doc: &StrategyDocument) -> anyhow::Result<String> {
        let mut out = String::new();

        writeln!(out, "# Маркетинговая Стратегия")?;
        writeln!(out)?;
        writeln!(out, "*{}*", or_dash(&doc.project_name))?;
        writeln!(out)?;
        writeln!(out, "Дата: {}", self.date.format("%d.%m.%Y"))?;

        section(&mut out, "1. Миссия и Цели")?;
        field(&mut out, "Миссия", &doc.intro.mission)?;
        field(&mut out, "Видение", &doc.intro.vision)?;
        field(&mut out, "SMART Цель", &doc.intro.smart_goal)?;

        section(&mut out, "2. Внешний аудит")?;
        let pest = &doc.external.pest;
        field(&mut out, "P", &pest.political)?;
        field(&mut out, "E", &pest.economic)?;
        field(&mut out, "S", &pest.social)?;
        field(&mut out, "T", &pest.tech)?;
        field(&mut out, "Объём рынка", &doc.external.market_size)?;
        writeln!(out)?;
        writeln!(out, "### Основные конкуренты")?;
        writeln!(out)?;
        table(
            &mut out,
            &["Компания", "Доля", "Сила"],
            doc.external
                .competitors
                .iter()
                .map(|c| vec![c.name.as_str(), c.share.as_str(), c.strength.as_str()]),
        )?;

        section(&mut out, "3. Внутренний аудит")?;
        let four_p = &doc.internal.audit_4p;
        field(&mut out, "Продукт", &four_p.product)?;
        field(&mut out, "Цена", &four_p.price)?;
        field(&mut out, "Место", &four_p.place)?;
        field(&mut out, "Продвижение", &four_p.promotion)?;
        field(&mut out, "ABC-анализ", &doc.internal.abc_analysis)?;

        section(&mut out, "4. SWOT-Анализ")?;
        field(&mut out, "S", &doc.swot.strengths.join(", "))?;
        field(&mut out, "W", &doc.swot.weaknesses.join(", "))?;
        field(&mut out, "O", &doc.swot.opportunities.join(", "))?;
        field(&mut out, "T", &doc.swot.threats.join(", "))?;

        section(&mut out, "5. Стратегия")?;
        field(&mut out, "Матрица Ансоффа", &doc.strategy.ansoff)?;
        field(&mut out, "Целевая аудитория", &doc.strategy.target_audience)?;
        field(&mut out, "Позиционирование", &doc.strategy.positioning)?;

        section(&mut out, "6. План и Бюджет")?;
        table(
            &mut out,
            &["Активность", "Срок", "Ответственный", "Бюджет"],
            doc.action_plan.iter().map(|a| {
                vec![
                    a.activity.as_str(),
                    a.deadline.as_str(),
                    a.owner.as_str(),
                    a.budget.as_str(),
                ]
            }),
        )?;

        Ok(out)
    }
}

fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        EMPTY
    } else {
        value
    }
}

fn section(out: &mut String, title: &str) -> std::fmt::Result {
    writeln!(out)?;
    writeln!(out, "## {}", title)?;
    writeln!(out)
}

/// Every line of a multi-line value ends in a hard break.
fn field(out: &mut String, label: &str, value: &str) -> std::fmt::Result {
    let text = lines(or_dash(value)).collect::<Vec<_>>().join("  \n");
    writeln!(out, "**{}:** {}  ", label, text)
}

/// Markdown table; a single dash line when there are no rows.
fn table<'a>(
    out: &mut String,
    headers: &[&str],
    rows: impl Iterator<Item = Vec<&'a str>>,
) -> std::fmt::Result {
    let mut rows = rows.peekable();
    if rows.peek().is_none() {
        return writeln!(out, "{}", EMPTY);
    }

    writeln!(out, "| {} |", headers.join(" | "))?;
    writeln!(out, "|{}", " --- |".repeat(headers.len()))?;
    for row in rows {
        let cells: Vec<String> = row.into_iter().map(cell).collect();
        writeln!(out, "| {} |", cells.join(" | "))?;
    }
    Ok(())
}

/// A table row must stay on one line.
fn cell(value: &str) -> String {
    lines(or_dash(value))
        .collect::<Vec<_>>()
        .join("<br>")
        .replace('|', "\\|")
}

fn lines(value: &str) -> impl Iterator<Item = &str> {
    value.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line))
}
