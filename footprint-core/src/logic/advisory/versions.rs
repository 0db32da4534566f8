//! Maintained Browser Versions
//!
//! Oldest major version per browser family that still receives
//! security fixes. Anything below is advised as an urgent update.

use serde::{Deserialize, Serialize};

// ============================================================================
// BROWSER FAMILY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrowserFamily {
    Chrome,
    Edge,
    Firefox,
    Safari,
    Opera,
}

impl BrowserFamily {
    /// Detect the family from a browser name ("Google Chrome", "Microsoft Edge", ...).
    /// Edge and Opera are checked before Chrome since they are Chromium-based.
    pub fn detect(browser_name: &str) -> Option<Self> {
        let name = browser_name.to_lowercase();
        if name.contains("edg") {
            Some(BrowserFamily::Edge)
        } else if name.contains("opera") || name.contains("opr") {
            Some(BrowserFamily::Opera)
        } else if name.contains("firefox") {
            Some(BrowserFamily::Firefox)
        } else if name.contains("chrome") || name.contains("chromium") {
            Some(BrowserFamily::Chrome)
        } else if name.contains("safari") {
            Some(BrowserFamily::Safari)
        } else {
            None
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BrowserFamily::Chrome => "Chrome",
            BrowserFamily::Edge => "Edge",
            BrowserFamily::Firefox => "Firefox",
            BrowserFamily::Safari => "Safari",
            BrowserFamily::Opera => "Opera",
        }
    }
}

// ============================================================================
// MAINTAINED VERSIONS TABLE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintainedVersions {
    pub chrome: u32,
    pub edge: u32,
    /// ESR line counts as maintained
    pub firefox: u32,
    pub safari: u32,
    pub opera: u32,
}

impl Default for MaintainedVersions {
    fn default() -> Self {
        Self {
            chrome: 120,
            edge: 120,
            firefox: 115,
            safari: 16,
            opera: 105,
        }
    }
}

impl MaintainedVersions {
    pub fn minimum_for(&self, family: BrowserFamily) -> u32 {
        match family {
            BrowserFamily::Chrome => self.chrome,
            BrowserFamily::Edge => self.edge,
            BrowserFamily::Firefox => self.firefox,
            BrowserFamily::Safari => self.safari,
            BrowserFamily::Opera => self.opera,
        }
    }

    /// True when the version is known to be below the maintained line
    pub fn is_outdated(&self, family: BrowserFamily, major_version: u32) -> bool {
        major_version < self.minimum_for(family)
    }
}

// ============================================================================
// TESTS
// ============================================================================
