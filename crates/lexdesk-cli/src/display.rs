//! Plain-text rendering of articles, court practice, documents, and deadlines.

use chrono::NaiveDate;
use lexdesk_client::dashboard::SEARCH_TAGS;
use lexdesk_client::practice::QUICK_TAGS;
use lexdesk_client::{DeadlinesView, DocumentsView, PracticeOutcome};
use lexdesk_core::deadline::{self, Bucket};
use lexdesk_core::{Article, CourtCase, Tier};

const MAX_LIST_ITEMS: usize = 20;
const SUMMARY_WIDTH: usize = 100;

// ── Articles ──

/// Print the search tab list: results under a results heading, otherwise the default list.
pub fn print_article_list(query: &str, results: &[Article], shown: &[Article]) {
    if query.trim().is_empty() {
        println!("Быстрый поиск: {}", SEARCH_TAGS.join(", "));
        println!();
        println!("=== Часто используемые статьи ===");
    } else {
        println!("=== Результаты поиска ({}) ===", results.len());
        if results.is_empty() {
            println!("Ничего не найдено по запросу \"{query}\"");
            if shown.is_empty() {
                return;
            }
            println!();
            println!("Часто используемые статьи:");
        }
    }
    println!();

    for article in shown {
        println!("  [{}] {}", article.code, article.title);
        if !article.description.is_empty() {
            println!("      {}", shorten(&article.description, SUMMARY_WIDTH));
        }
        if !article.punishment.is_empty() {
            println!("      {} · {}", article.category, shorten(&article.punishment, SUMMARY_WIDTH));
        }
    }
}

/// Print a selected article as a vertical card.
pub fn print_article_card(article: &Article) {
    println!("=== {} ===", article.code);
    println!("{}", article.title);
    println!();
    print_field("Описание", &article.description);
    print_field("Категория", &article.category);
    print_field("Санкция", &article.punishment);
}

// ── Court practice ──

pub fn print_practice(code: &str, outcome: PracticeOutcome, cases: &[CourtCase]) {
    match outcome {
        PracticeOutcome::NotSearched => {
            println!("Введите статью УК РФ, чтобы найти судебные решения");
            println!("Например: {}", QUICK_TAGS.join(", "));
            return;
        }
        PracticeOutcome::Empty => {
            println!("Практика не найдена");
            println!("По статье \"{code}\" судебная практика отсутствует в базе данных");
            return;
        }
        PracticeOutcome::Found(total) => {
            println!("=== Судебная практика по статье {code} ({total}) ===");
        }
    }
    println!();

    let show = cases.len().min(MAX_LIST_ITEMS);
    for case in &cases[..show] {
        print!("  {:<20}  {}", case.case_number, case.decision_type);
        if let Some(date) = case.decision_date.as_deref() {
            print!("  {}", display_date(date));
        }
        println!();
        println!("    {} · {}", case.court_name, case.article_code);
        if !case.summary.is_empty() {
            println!("    Обстоятельства дела: {}", shorten(&case.summary, SUMMARY_WIDTH));
        }
        if let Some(verdict) = case.verdict.as_deref()
            && !verdict.is_empty()
        {
            println!("    Решение суда: {}", shorten(verdict, SUMMARY_WIDTH));
        }
        if let Some(url) = case.url.as_deref() {
            println!("    Полный текст решения: {url}");
        }
    }
    if cases.len() > MAX_LIST_ITEMS {
        println!("  ... и ещё {}", cases.len() - MAX_LIST_ITEMS);
    }
}

// ── Documents ──

pub fn print_documents(view: &DocumentsView) {
    for (category, count) in view.counts() {
        let marker = if category == view.category() { ">" } else { " " };
        println!("{marker} {category:<20} {count}");
    }
    println!();

    let visible = view.visible();
    println!("=== Библиотека документов ({}) ===", visible.len());
    for doc in visible {
        println!("  {}", doc.title);
        println!("    {} · {}", doc.category, doc.code);
        if !doc.description.is_empty() {
            println!("    {}", shorten(&doc.description, SUMMARY_WIDTH));
        }
    }
}

// ── Deadlines ──

pub fn print_deadlines(view: &DeadlinesView, today: NaiveDate) {
    let summary = view.summary(today);
    println!("=== Календарь процессуальных сроков ===");
    println!(
        "  {:<10} {:>3}  истекают в ближайшие {} дней",
        Bucket::Critical.title(),
        summary.critical,
        deadline::CRITICAL_DAYS
    );
    println!(
        "  {:<10} {:>3}  до {} дней",
        Bucket::Warning.title(),
        summary.warning,
        deadline::WARNING_DAYS
    );
    println!("  {:<10} {:>3}  остальные", Bucket::Normal.title(), summary.normal);
    if summary.overdue > 0 {
        println!("  просрочено: {}", summary.overdue);
    }
    println!();

    for row in view.rows(today) {
        let c = row.classification;
        println!(
            "  [{:<8}] {:<14} {}",
            tier_name(c.tier),
            c.label(),
            row.deadline.title
        );
        println!(
            "             {} · срок: {}",
            row.deadline.article,
            deadline::format_date_ru(row.due)
        );
    }
    if summary.invalid > 0 {
        println!();
        println!("  пропущено записей с некорректной датой: {}", summary.invalid);
    }
}

fn tier_name(tier: Tier) -> &'static str {
    match tier {
        Tier::Overdue => "просрочен",
        Tier::High => "высокий",
        Tier::Medium => "средний",
        Tier::Low => "низкий",
    }
}

// ── Helpers ──

fn print_field(name: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    println!("  {:<12} {}", name, value);
}

/// Russian long date when parseable, the raw string otherwise.
fn display_date(raw: &str) -> String {
    deadline::parse_due_date(raw)
        .map(deadline::format_date_ru)
        .unwrap_or_else(|_| raw.to_string())
}

/// Truncate to `max` characters, appending "..." when cut.
fn shorten(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let head: String = s.chars().take(max.saturating_sub(3)).collect();
    format!("{head}...")
}
