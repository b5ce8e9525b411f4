//! Report rendering: standalone HTML page and terminal text

use colored::Colorize;
use std::fmt::Write;

use crate::types::{DepthLabel, Report};
use crate::ENGINE_NAME;

const HTML_STYLE: &str = r#"
    body {
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
        background: #0e0e11;
        color: #eaeaf0;
        padding: 60px 20px;
    }
    .container {
        max-width: 900px;
        margin: auto;
        background: #16161c;
        padding: 52px;
        border-radius: 14px;
        box-shadow: 0 20px 60px rgba(0,0,0,0.6);
    }
    h1 { font-size: 2.3em; margin-bottom: 6px; }
    .sub { color: #9aa0b0; margin-bottom: 36px; }
    h2 { margin-top: 42px; border-bottom: 1px solid #2a2a35; padding-bottom: 6px; }
    p, ul { line-height: 1.7; margin-top: 12px; }
    .note { color: #9aa0b0; font-style: italic; }
    .footer { margin-top: 48px; color: #777; font-size: 0.85em; }
"#;

/// Escape text for inclusion in HTML element content or attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Full standalone HTML page for a report
pub fn render_html(report: &Report) -> String {
    let mut body = String::new();

    push_paragraph(&mut body, "Orientation Snapshot", &report.orientation_snapshot);
    push_paragraph(&mut body, "Core Themes", &report.core_themes);
    push_paragraph(&mut body, "Underlying Behavioral Patterns", &report.sections.underlying_patterns);
    push_paragraph(&mut body, "Internal Dynamics &amp; Pressure Flow", &report.sections.internal_dynamics);
    push_paragraph(&mut body, "Decision &amp; Control Style", &report.sections.decision_control);
    push_list(&mut body, "Real-World Signals", &report.real_world_signals);
    push_list(&mut body, "Strengths", &report.strengths);
    push_list(&mut body, "Common Misinterpretations", &report.common_misinterpretations);
    push_list(&mut body, "Reflection Prompts", &report.reflection_prompts);

    let _ = write!(
        body,
        "<h2>Input Depth: {}</h2>\n<p class=\"note\">{}</p>\n",
        report.depth_rating.label,
        escape_html(&report.depth_rating.note)
    );
    if !report.next_step_note.is_empty() {
        let _ = write!(body, "<p class=\"note\">{}</p>\n", escape_html(&report.next_step_note));
    }

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{name} - Personality Snapshot</title>\n<style>{style}</style>\n</head>\n<body>\n\
         <div class=\"container\">\n<h1>{name}</h1>\n\
         <div class=\"sub\">Behavioral &amp; cognitive pattern snapshot</div>\n\
         {body}<div class=\"footer\">Generated by {name} · Observational snapshot, not a diagnosis</div>\n\
         </div>\n</body>\n</html>\n",
        name = ENGINE_NAME,
        style = HTML_STYLE,
        body = body,
    )
}

/// `title` is trusted markup; `text` is escaped
fn push_paragraph(out: &mut String, title: &str, text: &str) {
    let _ = write!(out, "<h2>{}</h2>\n<p>{}</p>\n", title, escape_html(text));
}

fn push_list(out: &mut String, title: &str, items: &[String]) {
    let _ = write!(out, "<h2>{}</h2>\n<ul>\n", title);
    for item in items {
        let _ = writeln!(out, "<li>{}</li>", escape_html(item));
    }
    out.push_str("</ul>\n");
}

/// Plain or colored text for the terminal
pub fn render_terminal(report: &Report, color: bool) -> String {
    let mut out = String::new();

    let depth = format!("Input depth: {}", report.depth_rating.label);
    let depth = if !color {
        depth
    } else {
        match report.depth_rating.label {
            DepthLabel::Limited => depth.yellow().to_string(),
            DepthLabel::Moderate => depth.cyan().to_string(),
            DepthLabel::High => depth.green().to_string(),
        }
    };
    let _ = writeln!(out, "{}", depth);
    let _ = writeln!(out, "  {}", dim(&report.depth_rating.note, color));

    section(&mut out, "Orientation Snapshot", color);
    let _ = writeln!(out, "{}", report.orientation_snapshot);

    section(&mut out, "Core Themes", color);
    let _ = writeln!(out, "{}", report.core_themes);

    section(&mut out, "Underlying Patterns", color);
    let _ = writeln!(out, "{}", report.sections.underlying_patterns);

    section(&mut out, "Internal Dynamics", color);
    let _ = writeln!(out, "{}", report.sections.internal_dynamics);

    section(&mut out, "Decision & Control", color);
    let _ = writeln!(out, "{}", report.sections.decision_control);

    bullets(&mut out, "Real-World Signals", &report.real_world_signals, color);
    bullets(&mut out, "Strengths", &report.strengths, color);
    bullets(&mut out, "Common Misinterpretations", &report.common_misinterpretations, color);
    bullets(&mut out, "Reflection Prompts", &report.reflection_prompts, color);

    if !report.next_step_note.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", dim(&report.next_step_note, color));
    }

    if let Some(diag) = &report.diagnostics {
        section(&mut out, "Diagnostics", color);
        let _ = writeln!(
            out,
            "dominant={} | secondary={} | words={} | sentences={}",
            diag.dominant_mode, diag.secondary_mode, diag.word_count, diag.sentence_count
        );
        let _ = writeln!(out, "Signals:");
        for (name, value) in diag.signal_summary.iter() {
            let _ = writeln!(out, "  {:<30} {}", name, value);
        }
        let _ = writeln!(out, "Mode scores:");
        for (mode, score) in diag.mode_scores.iter() {
            let _ = writeln!(out, "  {:<30} {:.2}", mode.name(), score);
        }
    }

    out
}

fn section(out: &mut String, title: &str, color: bool) {
    let _ = writeln!(out);
    if color {
        let _ = writeln!(out, "{}", title.bold().underline());
    } else {
        let _ = writeln!(out, "== {} ==", title);
    }
}

fn bullets(out: &mut String, title: &str, items: &[String], color: bool) {
    section(out, title, color);
    for item in items {
        let _ = writeln!(out, "  • {}", item);
    }
}

fn dim(text: &str, color: bool) -> String {
    if color {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}
