//! HTML rendering for OCR documents.
//!
//! Pages are first rendered to Markdown with images inlined as data
//! URIs, then converted to an HTML body and wrapped in a standalone
//! page template.

use pulldown_cmark::{html, Options, Parser};

use crate::model::Document;
use crate::render::markdown::to_markdown;
use crate::render::options::{ImageHandling, RenderOptions};

/// Render a document to a standalone HTML page.
pub fn to_html(doc: &Document, options: &RenderOptions) -> String {
    // Inline payloads so the page is self-contained, unless the caller
    // asked to strip images entirely.
    let md_options = match options.image_handling {
        ImageHandling::Strip => options.clone(),
        _ => options.clone().with_image_handling(ImageHandling::Inline),
    };
    let markdown = to_markdown(doc, &md_options);
    let body = markdown_to_html(&markdown);
    wrap_page(&body, &options.html_title)
}

/// Convert a Markdown fragment to an HTML fragment.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut parser_options = Options::empty();
    parser_options.insert(Options::ENABLE_TABLES);
    let parser = Parser::new_ext(markdown, parser_options);

    let mut out = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut out, parser);
    out
}

fn wrap_page(body: &str, title: &str) -> String {
    let title = html_escape::encode_text(title);
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{}</title>
    <style>
        body {{
            font-family: Arial, sans-serif;
            line-height: 1.6;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
        }}
        img {{
            max-width: 100%;
            height: auto;
        }}
        h1, h2, h3 {{
            margin-top: 1.5em;
        }}
        p {{
            margin: 1em 0;
        }}
    </style>
</head>
<body>
{}
</body>
</html>
"#,
        title, body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Page, PageImage};

    #[test]
    fn test_to_html_wraps_body() {
        let mut doc = Document::new();
        doc.add_page(Page::new("Hello, world!"));

        let html = to_html(&doc, &RenderOptions::default());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<p>Hello, world!</p>"));
        assert!(html.contains("<title>OCR Result</title>"));
    }

    #[test]
    fn test_to_html_inlines_images() {
        let mut doc = Document::new();
        doc.add_page(
            Page::new("![chart](img1.png)")
                .with_image(PageImage::new("img1.png", "QUFB")),
        );

        let html = to_html(&doc, &RenderOptions::default());
        assert!(html.contains("<img src=\"data:image/png;base64,QUFB\""));
    }

    #[test]
    fn test_to_html_escapes_title() {
        let mut doc = Document::new();
        doc.add_page(Page::new("Text"));

        let options = RenderOptions::new().with_html_title("<script>alert(1)</script>");
        let html = to_html(&doc, &options);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_to_html_strip_keeps_strip() {
        let mut doc = Document::new();
        doc.add_page(
            Page::new("Before ![x](img1) after")
                .with_image(PageImage::new("img1", "QUFB")),
        );

        let options = RenderOptions::new().strip_images();
        let html = to_html(&doc, &options);
        assert!(!html.contains("<img"));
        assert!(html.contains("Before"));
    }

    #[test]
    fn test_markdown_to_html_tables() {
        let md = "| a | b |\n|---|---|\n| 1 | 2 |";
        let html = markdown_to_html(md);
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>1</td>"));
    }

    #[test]
    fn test_markdown_to_html_heading() {
        let html = markdown_to_html("# Title");
        assert!(html.contains("<h1>Title</h1>"));
    }
}
