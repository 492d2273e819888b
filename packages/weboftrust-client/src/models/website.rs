//! Website model - everything the service reports about one URL.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::error::MissingMeasurement;
use crate::models::{Axis, Component};

/// Reputation a site must reach to count as trustworthy or child safe.
pub const DEFAULT_THRESHOLD: i32 = 50;

/// Confidence below which a rating is ignored.
///
/// The service itself only starts warning users at around this level.
pub const DEFAULT_MIN_CONFIDENCE: i32 = 10;

/// A website as described by the Web of Trust API.
///
/// Holds the trustworthiness and child-safety ratings, category assignments
/// with their confidence, and the third-party blacklists the site appears on.
/// An axis the service did not report stays `None`; a category that was not
/// reported is absent from the map, which is different from zero confidence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Website {
    url: String,
    trustworthiness: Option<Component>,
    child_safety: Option<Component>,
    #[serde(default)]
    categories: IndexMap<u32, i32>,
    #[serde(default)]
    blacklists: IndexSet<String>,
}

impl Website {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    // =========================================================================
    // Predicates
    // =========================================================================

    /// Is this site trustworthy, using the default thresholds?
    pub fn is_trustworthy(&self) -> Result<bool, MissingMeasurement> {
        self.is_trustworthy_with(DEFAULT_THRESHOLD, DEFAULT_MIN_CONFIDENCE)
    }

    /// Is the trustworthiness reputation at least `threshold`, reported with at
    /// least `min_confidence`?
    ///
    /// Fails if the service never rated this axis.
    pub fn is_trustworthy_with(
        &self,
        threshold: i32,
        min_confidence: i32,
    ) -> Result<bool, MissingMeasurement> {
        self.meets(Axis::Trustworthiness, threshold, min_confidence)
    }

    /// Is this site suitable for children, using the default thresholds?
    pub fn is_suitable_for_children(&self) -> Result<bool, MissingMeasurement> {
        self.is_suitable_for_children_with(DEFAULT_THRESHOLD, DEFAULT_MIN_CONFIDENCE)
    }

    /// Same rule as [`Website::is_trustworthy_with`], on the child-safety axis.
    pub fn is_suitable_for_children_with(
        &self,
        threshold: i32,
        min_confidence: i32,
    ) -> Result<bool, MissingMeasurement> {
        self.meets(Axis::ChildSafety, threshold, min_confidence)
    }

    fn meets(
        &self,
        axis: Axis,
        threshold: i32,
        min_confidence: i32,
    ) -> Result<bool, MissingMeasurement> {
        let component = self.component(axis).ok_or_else(|| MissingMeasurement {
            url: self.url.clone(),
            axis,
        })?;
        Ok(component.meets(threshold, min_confidence))
    }

    /// Does the site belong to `category` with at least the default confidence?
    pub fn is_in_category(&self, category: impl Into<u32>) -> bool {
        self.is_in_category_with(category, DEFAULT_MIN_CONFIDENCE)
    }

    /// Does the site belong to `category` with at least `min_confidence`?
    ///
    /// A category the service did not report never matches, whatever the
    /// threshold.
    pub fn is_in_category_with(&self, category: impl Into<u32>, min_confidence: i32) -> bool {
        self.category_confidence(category)
            .is_some_and(|confidence| confidence >= min_confidence)
    }

    /// Is the site on any blacklist?
    pub fn is_blacklisted(&self) -> bool {
        !self.blacklists.is_empty()
    }

    /// Is the site on the named blacklist (e.g. "malware", "phishing")?
    pub fn is_blacklisted_on(&self, list: &str) -> bool {
        self.blacklists.contains(list)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn trustworthiness(&self) -> Option<Component> {
        self.trustworthiness
    }

    pub fn child_safety(&self) -> Option<Component> {
        self.child_safety
    }

    pub fn component(&self, axis: Axis) -> Option<Component> {
        match axis {
            Axis::Trustworthiness => self.trustworthiness,
            Axis::ChildSafety => self.child_safety,
        }
    }

    /// Category codes mapped to confidence, in the order the service sent them.
    pub fn categories(&self) -> &IndexMap<u32, i32> {
        &self.categories
    }

    pub fn category_confidence(&self, category: impl Into<u32>) -> Option<i32> {
        self.categories.get(&category.into()).copied()
    }

    pub fn blacklists(&self) -> &IndexSet<String> {
        &self.blacklists
    }

    // =========================================================================
    // Mutators - each replaces the attribute and returns self for chaining
    // =========================================================================

    pub fn set_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.url = url.into();
        self
    }

    pub fn set_trustworthiness(&mut self, reputation: i32, confidence: i32) -> &mut Self {
        self.set_component(Axis::Trustworthiness, Component::new(reputation, confidence))
    }

    pub fn set_child_safety(&mut self, reputation: i32, confidence: i32) -> &mut Self {
        self.set_component(Axis::ChildSafety, Component::new(reputation, confidence))
    }

    pub fn set_component(&mut self, axis: Axis, component: Component) -> &mut Self {
        match axis {
            Axis::Trustworthiness => self.trustworthiness = Some(component),
            Axis::ChildSafety => self.child_safety = Some(component),
        }
        self
    }

    pub fn set_categories<C>(&mut self, categories: impl IntoIterator<Item = (C, i32)>) -> &mut Self
    where
        C: Into<u32>,
    {
        self.categories = categories
            .into_iter()
            .map(|(code, confidence)| (code.into(), confidence))
            .collect();
        self
    }

    pub fn set_blacklists<S>(&mut self, blacklists: impl IntoIterator<Item = S>) -> &mut Self
    where
        S: Into<String>,
    {
        self.blacklists = blacklists.into_iter().map(Into::into).collect();
        self
    }
}
