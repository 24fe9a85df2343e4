//! Page link types
//!
//! Defines the paging parameters of one rendered page and the
//! previous/next links derived from them.

use serde::Serialize;

/// Direction of a page link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageDirection {
    /// The page before the current one
    Previous,
    /// The page after the current one
    Next,
}

impl PageDirection {
    /// Identifier given to the link element
    pub fn id(&self) -> &'static str {
        match self {
            Self::Previous => "prev",
            Self::Next => "next",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Previous => "Previous page",
            Self::Next => "Next page",
        }
    }
}

/// Paging parameters of one rendered page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    /// Offset of the first item on the page
    pub start_index: u32,
    /// Maximum number of items per page
    pub page_size: u32,
    /// Number of items actually returned on the page
    pub items_returned: usize,
}

impl PageRequest {
    /// Create a page request
    pub fn new(start_index: u32, page_size: u32, items_returned: usize) -> Self {
        Self {
            start_index,
            page_size,
            items_returned,
        }
    }

    /// Links to the neighbouring pages.
    ///
    /// `previous` exists when `start_index - page_size >= 0`. `next` exists
    /// when the page is full: a full page may be followed by more items,
    /// which can yield a link to an empty page when the total happens to be
    /// a multiple of the page size.
    pub fn links(&self) -> PageLinkSet {
        let previous = self
            .start_index
            .checked_sub(self.page_size)
            .map(|start| PageLink::new(PageDirection::Previous, start, self.page_size));

        let next = (self.items_returned >= self.page_size as usize).then(|| {
            PageLink::new(
                PageDirection::Next,
                self.start_index.saturating_add(self.page_size),
                self.page_size,
            )
        });

        PageLinkSet { previous, next }
    }
}

/// A link to another page of the same collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageLink {
    /// Previous or next
    pub direction: PageDirection,
    /// Offset of the first item of the target page
    pub target_start_index: u32,
    /// Page size of the target page
    pub target_page_size: u32,
}

impl PageLink {
    /// Create a page link
    pub fn new(direction: PageDirection, target_start_index: u32, target_page_size: u32) -> Self {
        Self {
            direction,
            target_start_index,
            target_page_size,
        }
    }

    /// Identifier of the link element
    pub fn id(&self) -> &'static str {
        self.direction.id()
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        self.direction.label()
    }

    /// Query parameters selecting the target page
    pub fn query_params(&self) -> [(&'static str, String); 2] {
        [
            ("startindex", self.target_start_index.to_string()),
            ("maxfeatures", self.target_page_size.to_string()),
        ]
    }
}

/// Zero, one or two page links
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PageLinkSet {
    /// Link to the previous page
    pub previous: Option<PageLink>,
    /// Link to the next page
    pub next: Option<PageLink>,
}

impl PageLinkSet {
    /// Links in document order: previous first, then next
    pub fn iter(&self) -> impl Iterator<Item = &PageLink> {
        self.previous.iter().chain(self.next.iter())
    }

    /// Number of links
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Check if there are no links
    pub fn is_empty(&self) -> bool {
        self.previous.is_none() && self.next.is_none()
    }
}
