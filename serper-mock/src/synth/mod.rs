//! Mock response synthesis
//!
//! Builds structurally valid, category-appropriate payloads from a query
//! string. Everything is derived from the query except the knowledge-graph
//! coin-flip and the relative dates, which come from the injected [`Dice`]
//! and [`Clock`].

pub mod random;

use chrono::{Duration, NaiveDate};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::category::Category;
use crate::types::{
    AnswerBox, ImageResult, KnowledgeGraph, NewsResult, OrganicResult, PlaceResult,
    RelatedSearch, SearchResult, SiteLink, VideoResult,
};

pub use random::{Clock, Dice, FixedClock, FixedDice, SeededDice, SystemClock, ThreadDice};

/// A roll strictly above this attaches a knowledge graph (70% of web searches)
pub const KNOWLEDGE_GRAPH_THRESHOLD: u32 = 30;

/// Substrings that mark a definitional ("what is") query
pub const DEFINITION_MARKERS: [&str; 2] = ["是什么", "什么是"];

/// Leading marker stripped from the query in the answer box
const DEFINITION_PREFIX: &str = "什么是";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Builds mock search responses
#[derive(Clone)]
pub struct ResponseSynthesizer {
    dice: Arc<dyn Dice>,
    clock: Arc<dyn Clock>,
}

impl Default for ResponseSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ResponseSynthesizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseSynthesizer").finish_non_exhaustive()
    }
}

impl ResponseSynthesizer {
    /// Synthesizer backed by the thread-local RNG and the system clock
    pub fn new() -> Self {
        Self::with_sources(Arc::new(ThreadDice), Arc::new(SystemClock))
    }

    pub fn with_sources(dice: Arc<dyn Dice>, clock: Arc<dyn Clock>) -> Self {
        Self { dice, clock }
    }

    /// Replace the dice, keeping the clock
    pub fn with_dice(mut self, dice: impl Dice + 'static) -> Self {
        self.dice = Arc::new(dice);
        self
    }

    /// Replace the clock, keeping the dice
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Generate a response for a free-form category name.
    ///
    /// Unknown or empty names produce a web search response.
    pub fn generate(&self, query: &str, category: &str) -> SearchResult {
        self.generate_category(query, Category::parse(category))
    }

    /// Generate a response for a known category
    pub fn generate_category(&self, query: &str, category: Category) -> SearchResult {
        tracing::debug!(query, %category, "Synthesizing mock results");

        let mut result = SearchResult::new(query, category);
        let today = self.clock.today();

        match category {
            Category::Search => self.fill_search(&mut result, query, today),
            Category::Images => fill_images(&mut result, query),
            Category::Videos => fill_videos(&mut result, query),
            Category::News => fill_news(&mut result, query, today),
            Category::Places => fill_places(&mut result, query),
        }

        result
    }

    fn fill_search(&self, result: &mut SearchResult, query: &str, today: NaiveDate) {
        let escaped = escape(query);

        if self.dice.roll() > KNOWLEDGE_GRAPH_THRESHOLD {
            result.knowledge_graph = Some(KnowledgeGraph {
                title: format!("关于 {} 的信息", query),
                kind: "一般信息".to_string(),
                description: format!("{} 是一个广泛讨论的话题，涉及多个领域。", query),
                description_source: "维基百科".to_string(),
                description_link: format!("https://zh.wikipedia.org/wiki/{}", escaped),
                attributes: vec![
                    attribute("类别", "科技"),
                    attribute("重要性", "高"),
                    attribute("流行度", "上升中"),
                ],
                image: None,
            });
        }

        let organic = [
            (
                format!("深入了解 {} 的完整指南", query),
                format!("https://example.com/guide/{}", escaped),
                format!("本文详细介绍了{}的概念、应用场景以及最佳实践。", query),
                Some(days_ago(today, 1)),
            ),
            (
                format!("{} 的最新发展和趋势", query),
                format!("https://technews.com/latest/{}", escaped),
                "探索最新的技术进展和行业趋势，了解如何利用这些技术优化您的工作流程。".to_string(),
                Some(days_ago(today, 3)),
            ),
            (
                "官方文档和技术规范".to_string(),
                format!("https://docs.example.com/{}", escaped),
                "查看完整的API文档、使用示例和技术规范，帮助您更好地理解和应用相关技术。"
                    .to_string(),
                None,
            ),
            (
                "社区讨论和最佳实践".to_string(),
                format!("https://community.example.com/tags/{}", escaped),
                "加入开发者社区，与其他专家交流经验，分享您在使用过程中遇到的问题和解决方案。"
                    .to_string(),
                None,
            ),
            (
                "视频教程和在线课程".to_string(),
                format!("https://learning.example.com/courses/{}", escaped),
                "通过互动式学习路径，从基础到高级，系统性地掌握相关技能。".to_string(),
                None,
            ),
        ];

        result.organic = organic
            .into_iter()
            .zip(1..)
            .map(|((title, link, snippet, date), position)| OrganicResult {
                title,
                link,
                snippet,
                position,
                date,
                sitelinks: Vec::new(),
                attributes: BTreeMap::new(),
            })
            .collect();

        if let Some(first) = result.organic.first_mut() {
            first.sitelinks = vec![
                SiteLink {
                    title: format!("{} 入门教程", query),
                    link: "https://example.com/tutorial".to_string(),
                },
                SiteLink {
                    title: format!("{} 常见问题", query),
                    link: "https://example.com/faq".to_string(),
                },
            ];
        }

        result.related_searches = [
            format!("{} 教程", query),
            format!("{} 入门指南", query),
            format!("{} 最佳实践", query),
            format!("如何学习 {}", query),
            format!("{} vs 替代方案", query),
        ]
        .into_iter()
        .map(|query| RelatedSearch { query })
        .collect();

        if is_definitional(query) {
            let subject = query.strip_prefix(DEFINITION_PREFIX).unwrap_or(query);
            result.answer_box = Some(AnswerBox {
                title: format!("{} 的定义", subject),
                answer: format!("{} 是一种重要的技术概念，广泛应用于现代软件开发中。", subject),
                snippet: "了解更多详细信息请参考官方文档和社区资源。".to_string(),
                link: format!("https://zh.wikipedia.org/wiki/{}", escaped),
                date: None,
            });
        }
    }
}

fn fill_images(result: &mut SearchResult, query: &str) {
    let escaped = escape(query);
    let image = |title: String, n: u32, source: &str, width: u32, height: u32| {
        let url = format!("https://images.example.com/{}-{}.jpg", escaped, n);
        ImageResult {
            title,
            link: url.clone(),
            image_url: url,
            source: source.to_string(),
            width,
            height,
        }
    };

    result.images = vec![
        image(format!("{} 示意图", query), 1, "Example Images", 800, 600),
        image(format!("{} 架构图", query), 2, "Tech Diagrams", 1024, 768),
    ];
}

fn fill_videos(result: &mut SearchResult, query: &str) {
    let escaped = escape(query);
    result.videos = vec![
        VideoResult {
            title: format!("{} 入门教程", query),
            link: format!("https://videos.example.com/{}-tutorial", escaped),
            source: "Tech Tutorials".to_string(),
            date: "2024-01-15".to_string(),
            duration: "15:30".to_string(),
        },
        VideoResult {
            title: format!("{} 高级技巧", query),
            link: format!("https://videos.example.com/{}-advanced", escaped),
            source: "Dev Channel".to_string(),
            date: "2024-01-10".to_string(),
            duration: "22:45".to_string(),
        },
    ];
}

fn fill_news(result: &mut SearchResult, query: &str, today: NaiveDate) {
    let escaped = escape(query);
    result.news = vec![
        NewsResult {
            title: format!("{} 最新发展动态", query),
            link: format!("https://news.example.com/{}-latest", escaped),
            snippet: "了解最新的技术进展和行业应用案例。".to_string(),
            date: days_ago(today, 1),
            source: "Tech News Daily".to_string(),
            image_url: None,
        },
        NewsResult {
            title: format!("专家解读 {} 的未来趋势", query),
            link: format!("https://news.example.com/{}-trends", escaped),
            snippet: "行业专家分享他们对未来发展的见解和预测。".to_string(),
            date: days_ago(today, 2),
            source: "Future Tech Review".to_string(),
            image_url: None,
        },
    ];
}

fn fill_places(result: &mut SearchResult, query: &str) {
    result.places = vec![
        PlaceResult {
            title: format!("{} 技术公司", query),
            address: "上海市浦东新区张江高科技园区".to_string(),
            rating: 4.5,
            reviews: 128,
            category: "科技公司".to_string(),
            phone: Some("021-12345678".to_string()),
            website: Some("https://example.com".to_string()),
        },
        PlaceResult {
            title: format!("{} 研发中心", query),
            address: "北京市海淀区中关村".to_string(),
            rating: 4.7,
            reviews: 256,
            category: "研发机构".to_string(),
            phone: None,
            website: None,
        },
    ];
}

/// Whether the query asks "what is ..."
pub fn is_definitional(query: &str) -> bool {
    DEFINITION_MARKERS.iter().any(|m| query.contains(m))
}

/// Form-urlencode a query for use in a link
fn escape(query: &str) -> String {
    url::form_urlencoded::byte_serialize(query.as_bytes()).collect()
}

fn days_ago(today: NaiveDate, days: i64) -> String {
    (today - Duration::days(days)).format(DATE_FORMAT).to_string()
}

fn attribute(key: &str, value: &str) -> BTreeMap<String, String> {
    BTreeMap::from([(key.to_string(), value.to_string())])
}
