//! Server-rendered HTML for the browsing UI.

use problem_core::{Difficulty, Page, Problem, SortKey};
use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};
use pulldown_cmark_escape::{escape_href, escape_html};

use crate::models::{StatsResponse, UiQuery};

const SITE_TITLE: &str = "LeetCode Daily Series";
const CARD_TAG_LIMIT: usize = 3;

/// Escape text for HTML element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let _ = escape_html(&mut out, text);
    out
}

fn escape_url(url: &str) -> String {
    let mut out = String::with_capacity(url.len());
    let _ = escape_href(&mut out, url);
    out
}

/// Lowercased scheme of `url`, or `None` for a relative reference.
/// Whitespace and control characters are ignored.
fn url_scheme(url: &str) -> Option<String> {
    let cleaned: String = url
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_control())
        .collect();
    let end = cleaned.find([':', '/', '?', '#'])?;
    cleaned[end..]
        .starts_with(':')
        .then(|| cleaned[..end].to_ascii_lowercase())
}

/// Absolute `http`/`https` URL.
fn is_web_url(url: &str) -> bool {
    matches!(url_scheme(url).as_deref(), Some("http" | "https"))
}

/// Relative reference or web URL. Anything else (`javascript:`, `data:`)
/// is never emitted as a link target.
fn is_safe_link(url: &str) -> bool {
    url_scheme(url).is_none() || is_web_url(url)
}

/// Render a markdown body to HTML. Raw HTML in the source is shown as text
/// and link or image targets with other schemes are replaced by `#`.
pub fn markdown_to_html(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) if !is_safe_link(&dest_url) => Event::Start(Tag::Link {
            link_type,
            dest_url: CowStr::Borrowed("#"),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) if !is_safe_link(&dest_url) => Event::Start(Tag::Image {
            link_type,
            dest_url: CowStr::Borrowed("#"),
            title,
            id,
        }),
        other => other,
    });

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// `/?problem=<slug>`
pub fn problem_href(slug: &str) -> String {
    let query = serde_urlencoded::to_string([("problem", slug)]).unwrap_or_default();
    format!("/?{}", query)
}

/// List URL for `page`, carrying the current filters.
pub fn page_href(params: &UiQuery, page: usize) -> String {
    let mut pairs: Vec<(&str, String)> = Vec::new();
    for (key, value) in [
        ("search", &params.search),
        ("difficulty", &params.difficulty),
        ("tag", &params.tag),
        ("sort", &params.sort),
    ] {
        if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
            pairs.push((key, value.to_string()));
        }
    }
    pairs.push(("page", page.to_string()));

    let query = serde_urlencoded::to_string(&pairs).unwrap_or_default();
    format!("/?{}", query)
}

/// Everything the list view needs.
pub struct ListView<'a> {
    pub params: &'a UiQuery,
    pub stats: &'a StatsResponse,
    pub all_tags: &'a [String],
    pub page: &'a Page<Problem>,
}

pub fn render_list(view: &ListView<'_>) -> String {
    let mut body = String::new();
    body.push_str(&metrics(view.stats));
    body.push_str(&filter_form(view.params, view.all_tags));

    let shown = view.page.items.len();
    body.push_str(&format!(
        "<p class=\"summary\">Showing {} of {} problems</p>\n",
        shown, view.page.total
    ));

    if view.page.items.is_empty() {
        body.push_str("<p class=\"empty\">No problems match the current filters.</p>\n");
    } else {
        body.push_str("<section class=\"grid\">\n");
        for problem in &view.page.items {
            body.push_str(&card(problem));
        }
        body.push_str("</section>\n");
    }

    body.push_str(&pagination(view.params, view.page.page, view.page.total_pages));
    layout(SITE_TITLE, &body)
}

pub fn render_detail(problem: &Problem) -> String {
    let mut body = String::new();
    body.push_str("<article class=\"problem\">\n");
    body.push_str("<a class=\"back\" href=\"/\">&larr; All problems</a>\n");

    body.push_str("<div class=\"problem-meta\">");
    if let Some(number) = problem.number {
        body.push_str(&format!("<span class=\"number\">#{}</span>", number));
    }
    if let Some(date) = &problem.date {
        body.push_str(&format!("<span class=\"date\">{}</span>", escape(date)));
    }
    body.push_str("</div>\n");

    body.push_str(&format!("<h1>{}</h1>\n", escape(&problem.title)));
    body.push_str(&difficulty_badge(problem.difficulty));
    body.push_str(&tag_badges(&problem.tags, problem.tags.len()));

    body.push_str("<p class=\"links\">");
    body.push_str(&format!(
        "<a class=\"permalink\" href=\"{}\">Permalink</a>",
        escape(&problem_href(&problem.slug))
    ));
    if is_web_url(&problem.url) {
        body.push_str(&format!(
            " <a class=\"external\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">View on LeetCode</a>",
            escape_url(problem.url.trim())
        ));
    }
    body.push_str("</p>\n");

    body.push_str("<div class=\"content\">\n");
    body.push_str(&markdown_to_html(&problem.body));
    body.push_str("</div>\n</article>\n");

    layout(&format!("{} · {}", problem.title, SITE_TITLE), &body)
}

pub fn render_not_found(slug: &str) -> String {
    let body = format!(
        "<section class=\"not-found\">\n<h1>Problem not found</h1>\n<p>No problem with slug <code>{}</code>.</p>\n<a href=\"/\">&larr; Back to all problems</a>\n</section>\n",
        escape(slug)
    );
    layout(&format!("Not found · {}", SITE_TITLE), &body)
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n<title>{title}</title>\n<link rel=\"stylesheet\" href=\"/static/style.css\">\n</head>\n<body>\n<header class=\"site-header\"><a class=\"brand\" href=\"/\">{site}</a></header>\n<main class=\"container\">\n{body}</main>\n</body>\n</html>\n",
        title = escape(title),
        site = SITE_TITLE,
        body = body,
    )
}

fn metrics(stats: &StatsResponse) -> String {
    let metric = |value: usize, label: &str, class: &str| {
        format!(
            "<div class=\"metric {}\"><span class=\"metric-value\">{}</span><span class=\"metric-label\">{}</span></div>",
            class, value, label
        )
    };
    format!(
        "<section class=\"metrics\">{}{}{}{}</section>\n",
        metric(stats.total, "Total", "total"),
        metric(stats.easy, "Easy", "difficulty-easy"),
        metric(stats.medium, "Medium", "difficulty-medium"),
        metric(stats.hard, "Hard", "difficulty-hard"),
    )
}

fn filter_form(params: &UiQuery, all_tags: &[String]) -> String {
    let search = params.search.as_deref().unwrap_or_default();
    let difficulty = params.difficulty.as_deref().unwrap_or("All");
    let tag = params.tag.as_deref().unwrap_or_default();
    let sort = params.sort.as_deref().unwrap_or(SortKey::default().as_str());

    let mut form = String::from("<form class=\"filters\" method=\"get\" action=\"/\">\n");
    form.push_str(&format!(
        "<input type=\"search\" name=\"search\" value=\"{}\" placeholder=\"Search title, number or tag\">\n",
        escape(search)
    ));

    form.push_str("<select name=\"difficulty\">");
    form.push_str(&option("All", "All difficulties", difficulty == "All"));
    for d in Difficulty::ALL {
        form.push_str(&option(d.as_str(), d.as_str(), difficulty == d.as_str()));
    }
    form.push_str("</select>\n");

    form.push_str("<select name=\"tag\">");
    form.push_str(&option("", "All tags", tag.is_empty()));
    for t in all_tags {
        form.push_str(&option(t, t, tag == t));
    }
    form.push_str("</select>\n");

    form.push_str("<select name=\"sort\">");
    for key in SortKey::ALL {
        form.push_str(&option(key.as_str(), key.label(), sort == key.as_str()));
    }
    form.push_str("</select>\n");

    form.push_str("<button type=\"submit\">Apply</button>\n<a class=\"reset\" href=\"/\">Reset</a>\n</form>\n");
    form
}

fn option(value: &str, label: &str, selected: bool) -> String {
    format!(
        "<option value=\"{}\"{}>{}</option>",
        escape(value),
        if selected { " selected" } else { "" },
        escape(label)
    )
}

fn card(problem: &Problem) -> String {
    let number = problem
        .number
        .map(|n| format!("<span class=\"number\">#{}</span>", n))
        .unwrap_or_default();
    let date = problem
        .date
        .as_deref()
        .map(|d| format!("<span class=\"date\">{}</span>", escape(d)))
        .unwrap_or_default();

    format!(
        "<a class=\"card\" href=\"{href}\">\n<div class=\"card-meta\">{number}{badge}</div>\n<h3>{title}</h3>\n{tags}{date}\n</a>\n",
        href = escape(&problem_href(&problem.slug)),
        number = number,
        badge = difficulty_badge(problem.difficulty),
        title = escape(&problem.title),
        tags = tag_badges(&problem.tags, CARD_TAG_LIMIT),
        date = date,
    )
}

fn difficulty_badge(difficulty: Difficulty) -> String {
    format!(
        "<span class=\"badge difficulty-{}\">{}</span>",
        difficulty.as_str().to_lowercase(),
        difficulty
    )
}

/// Up to `limit` tag badges, then a `+N` badge for the rest.
fn tag_badges(tags: &[String], limit: usize) -> String {
    if tags.is_empty() {
        return String::new();
    }

    let mut out = String::from("<div class=\"tags\">");
    for tag in tags.iter().take(limit) {
        out.push_str(&format!("<span class=\"tag\">{}</span>", escape(tag)));
    }
    if tags.len() > limit {
        out.push_str(&format!("<span class=\"tag more\">+{}</span>", tags.len() - limit));
    }
    out.push_str("</div>\n");
    out
}

fn pagination(params: &UiQuery, page: usize, total_pages: usize) -> String {
    if total_pages <= 1 {
        return String::new();
    }

    let mut nav = String::from("<nav class=\"pagination\">");
    if page > 1 {
        nav.push_str(&format!(
            "<a class=\"prev\" href=\"{}\">&larr; Prev</a>",
            escape(&page_href(params, page - 1))
        ));
    }
    nav.push_str(&format!(
        "<span class=\"page-info\">Page {} of {}</span>",
        page, total_pages
    ));
    if page < total_pages {
        nav.push_str(&format!(
            "<a class=\"next\" href=\"{}\">Next &rarr;</a>",
            escape(&page_href(params, page + 1))
        ));
    }
    nav.push_str("</nav>\n");
    nav
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn problem(tags: &[&str]) -> Problem {
        Problem {
            slug: "1-two-sum".to_string(),
            title: "Two <Sum>".to_string(),
            number: Some(1),
            difficulty: Difficulty::Easy,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            date: Some("2024-01-01".to_string()),
            url: String::new(),
            body: "Use a **map**.".to_string(),
            filename: "0001-two-sum.md".to_string(),
        }
    }

    #[test]
    fn escape_special_characters() {
        assert_eq!(escape("<a href=\"x\">&'</a>"), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;");
    }

    #[test]
    fn markdown_renders_and_neutralizes_raw_html() {
        let html = markdown_to_html("**bold**\n\n<script>alert(1)</script>\n");
        assert!(html.contains("<strong>bold</strong>"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn page_href_carries_filters() {
        let params = UiQuery {
            search: Some("two sum".to_string()),
            difficulty: Some("Easy".to_string()),
            tag: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(page_href(&params, 2), "/?search=two+sum&difficulty=Easy&page=2");
    }

    #[test]
    fn card_caps_tags() {
        let html = card(&problem(&["Array", "Hash Table", "Sorting", "Graph", "Trie"]));
        assert!(html.contains("Sorting"));
        assert!(!html.contains("Graph"));
        assert!(html.contains("+2"));
        assert!(html.contains("Two &lt;Sum&gt;"));
        assert!(html.contains("href=\"/?problem=1-two-sum\""));
    }

    #[test]
    fn detail_shows_all_tags_and_body() {
        let html = render_detail(&problem(&["Array", "Hash Table", "Sorting", "Graph"]));
        assert!(html.contains("Graph"));
        assert!(!html.contains("+1"));
        assert!(html.contains("<strong>map</strong>"));
        assert!(!html.contains("View on LeetCode"));
    }

    #[test]
    fn detail_links_external_url() {
        let mut p = problem(&[]);
        p.url = "https://leetcode.com/problems/two-sum/".to_string();
        assert!(render_detail(&p).contains("href=\"https://leetcode.com/problems/two-sum/\""));
    }

    #[test]
    fn detail_drops_script_urls() {
        let p = problem_core::parse(
            "---\ntitle: X\nurl: \"javascript:alert(document.cookie)\"\n---\nSee [here](javascript:alert(1)) and ![img](data:text/html;base64,AAAA).",
            "x.md",
        );
        let html = render_detail(&p);
        assert!(!html.contains("href=\"javascript:"));
        assert!(!html.contains("src=\"data:"));
        assert!(!html.contains("View on LeetCode"));
        assert!(html.contains("<a href=\"#\">here</a>"));
    }

    #[test]
    fn markdown_keeps_web_and_relative_links() {
        let html = markdown_to_html(
            "[a](https://leetcode.com/) [b](/?problem=1-two-sum) [c](notes.md) [d](JavaScript:alert(1))",
        );
        assert!(html.contains("<a href=\"https://leetcode.com/\">a</a>"));
        assert!(html.contains("<a href=\"/?problem=1-two-sum\">b</a>"));
        assert!(html.contains("<a href=\"notes.md\">c</a>"));
        assert!(html.contains("<a href=\"#\">d</a>"));
    }

    #[test]
    fn url_schemes() {
        assert!(is_web_url("HTTPS://leetcode.com"));
        assert!(!is_web_url("/relative"));
        assert!(is_safe_link("/?problem=x"));
        assert!(is_safe_link("#top"));
        assert!(!is_safe_link(" java\tscript:alert(1)"));
        assert!(!is_safe_link("data:text/html,x"));
    }

    #[test]
    fn pagination_hidden_for_single_page() {
        assert_eq!(pagination(&UiQuery::default(), 1, 1), "");
        let nav = pagination(&UiQuery::default(), 1, 2);
        assert!(!nav.contains("Prev"));
        assert!(nav.contains("Next"));
    }
}
