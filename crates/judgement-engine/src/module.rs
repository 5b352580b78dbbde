//! Generic article rule module
//!
//! Every statutory article follows the same shape: an ordered list of
//! guarded rule functions over a [`RuleContext`], evaluated top to bottom
//! with the first non-`None` result winning. One type serves all articles;
//! an article is just data.

use shared_types::JudgementResult;

use crate::article::ArticleId;
use crate::context::RuleContext;

/// One guarded rule. Returns `None` when its guard condition does not hold.
pub type Rule = fn(&RuleContext) -> Option<JudgementResult>;

/// Ordered rule chain for one article.
pub struct ArticleModule {
    pub article: ArticleId,
    /// Evaluated in order; precedence among overlapping rules is exactly
    /// this ordering.
    pub rules: &'static [Rule],
    /// Message for the generic not-required fallback.
    pub none_message: &'static str,
}

impl ArticleModule {
    /// First-match-wins evaluation of the rule chain.
    pub fn judge(&self, ctx: &RuleContext) -> Option<JudgementResult> {
        self.rules.iter().find_map(|rule| rule(ctx))
    }

    /// Result when no rule in the chain applied.
    pub fn fallback(&self) -> JudgementResult {
        JudgementResult::not_required(self.none_message)
    }
}
