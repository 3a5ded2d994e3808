//! Markdown Rendering
//!
//! Extends pulldown-cmark with:
//! - Syntax highlighting (syntect)
//! - Code block language labels and copy buttons
//! - Obsidian-style callouts: `> [!warning] Title`

use pulldown_cmark::{html::push_html, CodeBlockKind, CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use std::sync::OnceLock;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

/// Syntax highlighter resources (lazy loaded)
static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
static THEME_SET: OnceLock<ThemeSet> = OnceLock::new();

const THEME_NAME: &str = "base16-ocean.dark";

fn get_syntax_set() -> &'static SyntaxSet {
    SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

fn get_theme() -> Option<&'static Theme> {
    THEME_SET.get_or_init(ThemeSet::load_defaults).themes.get(THEME_NAME)
}

/// Short language names and their display label
const LANGUAGE_ALIASES: &[(&str, &str)] = &[
    ("JS", "JAVASCRIPT"),
    ("TS", "TYPESCRIPT"),
    ("PY", "PYTHON"),
    ("YML", "YAML"),
];

/// Render markdown to HTML with all extensions enabled
pub fn parse_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let events = transform_callouts(transform_code_blocks(parser));
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TABLES
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES
}

/// Plain text of the first level-1 heading, inline markup stripped
pub fn extract_title(text: &str) -> Option<String> {
    let mut in_title = false;
    let mut title = String::new();
    for event in Parser::new_ext(text, get_options()) {
        match event {
            Event::Start(Tag::Heading { level: HeadingLevel::H1, .. }) => in_title = true,
            Event::End(TagEnd::Heading(HeadingLevel::H1)) if in_title => {
                let trimmed = title.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
                in_title = false;
                title.clear();
            }
            Event::Text(t) | Event::Code(t) if in_title => title.push_str(&t),
            _ => {}
        }
    }
    None
}

// ========================
// Code Blocks
// ========================

/// How a code block is labeled
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CodeLabel {
    /// Text of the label shown on the block
    pub label: Option<String>,
    /// Value of the `data-language` attribute
    pub data_language: Option<String>,
    /// Extra CSS classes for the block
    pub classes: Vec<&'static str>,
}

/// Display label for a fence or `language-xxx` token
pub fn normalize_language(token: &str) -> Option<String> {
    let upper = token.trim().to_uppercase();
    if upper.is_empty() {
        return None;
    }
    let label = LANGUAGE_ALIASES
        .iter()
        .find(|(short, _)| *short == upper)
        .map(|(_, long)| long.to_string())
        .unwrap_or(upper);
    Some(label)
}

fn looks_like_oauth(content: &str) -> bool {
    content.contains("oauth") || content.contains("client_id") || content.contains("redirect_uri")
}

fn looks_like_graphql(content: &str) -> bool {
    let braces = content.contains('{');
    (content.contains("query") && braces)
        || (content.contains("type") && braces)
        || (content.contains("fragment") && content.contains("on"))
        || (content.contains("mutation") && braces)
        || (content.contains("subscription") && braces)
}

/// Work out label, data-language and classes for a code block
pub fn code_label(language: Option<&str>, content: &str) -> CodeLabel {
    let label = language.and_then(normalize_language);
    let mut code = CodeLabel {
        data_language: label.clone(),
        label,
        classes: Vec::new(),
    };

    if looks_like_oauth(content) {
        code.data_language = Some("OAUTH".to_string());
        code.classes.push("oauth-code");
    }
    if code.label.is_none() && looks_like_graphql(content) {
        code.label = Some("GRAPHQL".to_string());
        code.data_language = Some("GRAPHQL".to_string());
        code.classes.push("graphql-code");
    }
    code
}

/// Transform parser events, replacing code blocks with highlighted HTML
fn transform_code_blocks<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    enum State {
        Normal,
        InCodeBlock { lang: Option<String>, content: String },
    }

    let mut events = Vec::new();
    let mut state = State::Normal;

    for event in parser {
        match state {
            State::Normal => match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(info) => info.split_whitespace().next().map(str::to_string),
                        CodeBlockKind::Indented => None,
                    };
                    state = State::InCodeBlock { lang, content: String::new() };
                }
                other => events.push(other),
            },
            State::InCodeBlock { ref lang, ref mut content } => match event {
                Event::Text(t) => content.push_str(&t),
                Event::End(TagEnd::CodeBlock) => {
                    events.push(Event::Html(CowStr::from(render_code_block(content, lang.as_deref()))));
                    state = State::Normal;
                }
                _ => {}
            },
        }
    }

    events
}

fn render_code_block(code: &str, lang: Option<&str>) -> String {
    let label = code_label(lang, code);
    let mut classes = vec!["code-highlight"];
    classes.extend(label.classes.iter().copied());

    let data_language = label
        .data_language
        .as_deref()
        .map(|l| format!(r#" data-language="{}""#, escape_html(l)))
        .unwrap_or_default();
    let label_html = label
        .label
        .as_deref()
        .map(|l| format!(r#"<div class="code-language-label">{}</div>"#, escape_html(l)))
        .unwrap_or_default();

    format!(
        r#"<div class="{}"{}>{}<button type="button" class="copy-code-button">Copy</button>{}</div>"#,
        classes.join(" "),
        data_language,
        label_html,
        highlight_code(code, lang)
    )
}

fn highlight_code(code: &str, lang: Option<&str>) -> String {
    let fallback = || format!("<pre><code>{}</code></pre>", escape_html(code));
    let Some(theme) = get_theme() else {
        return fallback();
    };
    let ss = get_syntax_set();
    let syntax = lang
        .and_then(|l| ss.find_syntax_by_token(l))
        .unwrap_or_else(|| ss.find_syntax_plain_text());

    highlighted_html_for_string(code, ss, syntax, theme).unwrap_or_else(|_| fallback())
}

// ========================
// Callouts
// ========================

/// Parsed `[!kind] title` header of a callout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Callout {
    pub kind: String,
    pub title: String,
    /// `Some(open)` for foldable callouts (`+` open, `-` collapsed)
    pub fold: Option<bool>,
}

/// Parse the first line of a blockquote as a callout header
pub fn parse_callout_header(line: &str) -> Option<Callout> {
    let rest = line.trim().strip_prefix("[!")?;
    let (kind, rest) = rest.split_once(']')?;
    let kind = kind.trim().to_lowercase();
    if kind.is_empty() || !kind.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return None;
    }

    let (fold, rest) = match rest.chars().next() {
        Some('+') => (Some(true), &rest[1..]),
        Some('-') => (Some(false), &rest[1..]),
        _ => (None, rest),
    };
    let title = match rest.trim() {
        "" => capitalize(&kind),
        t => t.to_string(),
    };
    Some(Callout { kind, title, fold })
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Replace callout blockquotes with callout containers
fn transform_callouts(events: Vec<Event<'_>>) -> Vec<Event<'_>> {
    let mut out = Vec::with_capacity(events.len());
    let mut iter = events.into_iter();

    while let Some(event) = iter.next() {
        if !matches!(event, Event::Start(Tag::BlockQuote)) {
            out.push(event);
            continue;
        }

        // Collect the quote's body up to its matching end
        let mut depth = 0usize;
        let mut inner = Vec::new();
        for ev in iter.by_ref() {
            match ev {
                Event::Start(Tag::BlockQuote) => depth += 1,
                Event::End(TagEnd::BlockQuote) if depth == 0 => break,
                Event::End(TagEnd::BlockQuote) => depth -= 1,
                _ => {}
            }
            inner.push(ev);
        }
        let inner = transform_callouts(inner);

        match split_callout(inner) {
            Ok((callout, body)) => {
                out.push(Event::Html(CowStr::from(callout_open(&callout))));
                out.extend(body);
                out.push(Event::Html(CowStr::from(callout_close(&callout))));
            }
            Err(inner) => {
                out.push(Event::Start(Tag::BlockQuote));
                out.extend(inner);
                out.push(Event::End(TagEnd::BlockQuote));
            }
        }
    }
    out
}

/// Split a blockquote body into its callout header and remaining events
fn split_callout(inner: Vec<Event<'_>>) -> Result<(Callout, Vec<Event<'_>>), Vec<Event<'_>>> {
    if !matches!(inner.first(), Some(Event::Start(Tag::Paragraph))) {
        return Err(inner);
    }

    // The header is the leading text of the first paragraph, up to the first line break
    let mut header = String::new();
    let mut stop = inner.len();
    for (i, event) in inner.iter().enumerate().skip(1) {
        match event {
            Event::Text(t) => header.push_str(t),
            _ => {
                stop = i;
                break;
            }
        }
    }
    let Some(callout) = parse_callout_header(&header) else {
        return Err(inner);
    };

    let mut rest = inner.into_iter().skip(stop).peekable();
    let mut body = Vec::new();
    match rest.peek() {
        Some(Event::End(TagEnd::Paragraph)) => {
            rest.next();
        }
        Some(Event::SoftBreak) | Some(Event::HardBreak) => {
            rest.next();
            body.push(Event::Start(Tag::Paragraph));
        }
        Some(_) => body.push(Event::Start(Tag::Paragraph)),
        None => {}
    }
    body.extend(rest);
    Ok((callout, body))
}

fn callout_open(callout: &Callout) -> String {
    let class = format!("callout callout-{}", callout.kind);
    let title = escape_html(&callout.title);
    match callout.fold {
        Some(open) => format!(
            r#"<details class="{}" data-callout="{}"{}><summary class="callout-title">{}</summary><div class="callout-content">"#,
            class,
            callout.kind,
            if open { " open" } else { "" },
            title
        ),
        None => format!(
            r#"<div class="{}" data-callout="{}"><div class="callout-title">{}</div><div class="callout-content">"#,
            class, callout.kind, title
        ),
    }
}

fn callout_close(callout: &Callout) -> &'static str {
    match callout.fold {
        Some(_) => "</div></details>",
        None => "</div></div>",
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
