use htmd::{
    options::{CodeBlockStyle, HeadingStyle, Options},
    HtmlToMarkdown,
};
use scraper::{ElementRef, Html, Selector};

use crate::domain::extracted_page::ExtractedPage;

const BOILERPLATE_SELECTOR: &str = "script, style, nav, footer, iframe, .ads";

// Highest priority first
const MAIN_CONTENT_SELECTORS: [&str; 5] = ["article", "main", ".content", "#content", ".post"];

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("invalid selector `{selector}`: {reason}")]
    Selector {
        selector: &'static str,
        reason: String,
    },
    #[error("failed to convert html to markdown")]
    Markdown(#[from] std::io::Error),
}

pub struct ContentExtractor {
    boilerplate: Selector,
    title: Selector,
    first_heading: Selector,
    main_content: Vec<Selector>,
    body: Selector,
    converter: HtmlToMarkdown,
}

fn parse_selector(selector: &'static str) -> Result<Selector, ExtractError> {
    Selector::parse(selector).map_err(|e| ExtractError::Selector {
        selector,
        reason: e.to_string(),
    })
}

impl ContentExtractor {
    pub fn new() -> Result<Self, ExtractError> {
        let main_content = MAIN_CONTENT_SELECTORS
            .into_iter()
            .map(parse_selector)
            .collect::<Result<Vec<_>, _>>()?;

        let converter = HtmlToMarkdown::builder()
            .options(Options {
                heading_style: HeadingStyle::Atx,
                code_block_style: CodeBlockStyle::Fenced,
                ..Default::default()
            })
            .build();

        Ok(ContentExtractor {
            boilerplate: parse_selector(BOILERPLATE_SELECTOR)?,
            title: parse_selector("title")?,
            first_heading: parse_selector("h1")?,
            main_content,
            body: parse_selector("body")?,
            converter,
        })
    }

    /// Turns a raw html document into its title and main content as markdown.
    ///
    /// Boilerplate is detached from the whole document first. Detached nodes
    /// stay in the tree's arena, so every later lookup walks down from the root
    /// element instead of using `Html::select`. The content region is the first
    /// match of the highest priority selector, then `<body>`, then nothing.
    pub fn extract(&self, html: &str) -> Result<ExtractedPage, ExtractError> {
        let mut document = Html::parse_document(html);
        self.strip_boilerplate(&mut document);

        let root = document.root_element();
        let title = self.title(root);
        let content = match self.main_content_html(root) {
            Some(region) => self.converter.convert(&region)?,
            None => String::new(),
        };

        Ok(ExtractedPage { title, content })
    }

    fn strip_boilerplate(&self, document: &mut Html) {
        let node_ids: Vec<_> = document
            .select(&self.boilerplate)
            .map(|element| element.id())
            .collect();

        for node_id in node_ids {
            if let Some(mut node) = document.tree.get_mut(node_id) {
                node.detach();
            }
        }
    }

    fn title(&self, root: ElementRef<'_>) -> String {
        let title: String = root
            .select(&self.title)
            .flat_map(|element| element.text())
            .collect();

        match title.trim() {
            "" => root
                .select(&self.first_heading)
                .next()
                .map(|h1| h1.text().collect::<String>().trim().to_string())
                .unwrap_or_default(),
            title => title.to_string(),
        }
    }

    fn main_content_html(&self, root: ElementRef<'_>) -> Option<String> {
        self.main_content
            .iter()
            .find_map(|selector| root.select(selector).next())
            .map(|region| region.inner_html())
            .filter(|html| !html.is_empty())
            .or_else(|| {
                root.select(&self.body)
                    .next()
                    .map(|body| body.inner_html())
                    .filter(|html| !html.is_empty())
            })
    }
}
