//! Route authorization rules.
//!
//! A declarative, ordered rule table decides whether a navigation must be
//! redirected before rendering. The table is pure data evaluated by a
//! single function; it holds no internal state and is re-run on every
//! pathname or status change.

/// Inputs to a single route evaluation.
///
/// 路由判定输入。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteContext<'a> {
    pub pathname: &'a str,
    pub setup_complete: bool,
    pub authenticated: bool,
}

/// Path matching strategies for a rule.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PathPattern {
    /// Matches every pathname.
    Any,
    /// Matches one pathname exactly.
    Exact(String),
    /// Matches the pathname and everything below it.
    Prefix(String),
}

impl PathPattern {
    pub fn matches(&self, pathname: &str) -> bool {
        match self {
            PathPattern::Any => true,
            PathPattern::Exact(path) => pathname == path,
            PathPattern::Prefix(prefix) => pathname.starts_with(prefix.as_str()),
        }
    }
}

/// A single redirect rule.
///
/// `requires_*` fields of `None` match any value of that flag.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RoutingRule {
    pub pattern: PathPattern,
    pub requires_setup_complete: Option<bool>,
    pub requires_authenticated: Option<bool>,
    pub target: String,
}

impl RoutingRule {
    fn condition_holds(&self, ctx: &RouteContext<'_>) -> bool {
        self.requires_setup_complete
            .map_or(true, |wanted| wanted == ctx.setup_complete)
            && self
                .requires_authenticated
                .map_or(true, |wanted| wanted == ctx.authenticated)
    }
}

/// An ordered redirect table with first-match-wins semantics.
///
/// Default table, in priority order:
///
/// | # | pattern        | setup complete | authenticated | target       |
/// |---|----------------|----------------|---------------|--------------|
/// | 1 | any            | false          | -             | `/setup`     |
/// | 2 | exact `/setup` | true           | -             | `/dashboard` |
/// | 3 | any            | true           | false         | `/login`     |
/// | 4 | exact `/`      | true           | true          | `/dashboard` |
///
/// Exempt pathnames are never redirected away from.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RouteTable {
    pub exempt: Vec<String>,
    pub rules: Vec<RoutingRule>,
}

impl RouteTable {
    /// Evaluate the table for one navigation.
    ///
    /// A rule whose target equals the current pathname is treated as not
    /// matching, so evaluating the table again on a redirect target under
    /// the same flags yields `None`.
    pub fn resolve(&self, ctx: &RouteContext<'_>) -> Option<&str> {
        if self.exempt.iter().any(|path| path == ctx.pathname) {
            return None;
        }

        self.rules.iter().find_map(|rule| {
            if rule.target == ctx.pathname {
                return None;
            }
            (rule.pattern.matches(ctx.pathname) && rule.condition_holds(ctx))
                .then(|| rule.target.as_str())
        })
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            exempt: vec![
                "/login".to_string(),
                "/recovery".to_string(),
                "/not-found".to_string(),
            ],
            rules: vec![
                RoutingRule {
                    pattern: PathPattern::Any,
                    requires_setup_complete: Some(false),
                    requires_authenticated: None,
                    target: "/setup".to_string(),
                },
                RoutingRule {
                    pattern: PathPattern::Exact("/setup".to_string()),
                    requires_setup_complete: Some(true),
                    requires_authenticated: None,
                    target: "/dashboard".to_string(),
                },
                RoutingRule {
                    pattern: PathPattern::Any,
                    requires_setup_complete: Some(true),
                    requires_authenticated: Some(false),
                    target: "/login".to_string(),
                },
                RoutingRule {
                    pattern: PathPattern::Exact("/".to_string()),
                    requires_setup_complete: Some(true),
                    requires_authenticated: Some(true),
                    target: "/dashboard".to_string(),
                },
            ],
        }
    }
}
