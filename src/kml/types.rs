//! KML feature tree

/// Kind of a KML feature node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureKind {
    Document,
    Folder,
    Placemark,
    NetworkLink,
}

/// A node of the KML output tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feature {
    Document(Document),
    Folder(Folder),
    Placemark(Placemark),
    NetworkLink(NetworkLink),
}

impl Feature {
    /// Kind of this node
    pub fn kind(&self) -> FeatureKind {
        match self {
            Feature::Document(_) => FeatureKind::Document,
            Feature::Folder(_) => FeatureKind::Folder,
            Feature::Placemark(_) => FeatureKind::Placemark,
            Feature::NetworkLink(_) => FeatureKind::NetworkLink,
        }
    }

    /// The folder, if this node is one
    pub fn as_folder(&self) -> Option<&Folder> {
        match self {
            Feature::Folder(folder) => Some(folder),
            _ => None,
        }
    }

    /// The folder, mutably, if this node is one
    pub fn as_folder_mut(&mut self) -> Option<&mut Folder> {
        match self {
            Feature::Folder(folder) => Some(folder),
            _ => None,
        }
    }
}

/// Top-level document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub name: Option<String>,
    pub features: Vec<Feature>,
}

/// Container of features; one page of a feature collection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Folder {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub features: Vec<Feature>,
}

impl Folder {
    /// Create a named folder
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Append an empty network link and return it for filling in
    pub fn create_and_add_network_link(&mut self) -> &mut NetworkLink {
        self.features
            .push(Feature::NetworkLink(NetworkLink::default()));
        match self.features.last_mut() {
            Some(Feature::NetworkLink(link)) => link,
            _ => unreachable!("just pushed a network link"),
        }
    }

    /// Network links among the direct children
    pub fn network_links(&self) -> impl Iterator<Item = &NetworkLink> {
        self.features.iter().filter_map(|f| match f {
            Feature::NetworkLink(link) => Some(link),
            _ => None,
        })
    }

    /// Placemarks among the direct children
    pub fn placemarks(&self) -> impl Iterator<Item = &Placemark> {
        self.features.iter().filter_map(|f| match f {
            Feature::Placemark(p) => Some(p),
            _ => None,
        })
    }
}

/// A single feature
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placemark {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Reference to remote KML fetched separately by the client
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkLink {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub link: Option<Link>,
}

impl NetworkLink {
    /// Set the link target, creating the link if needed
    pub fn create_and_set_link(&mut self) -> &mut Link {
        self.link.get_or_insert_with(Link::default)
    }
}

/// Target of a network link
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Link {
    pub href: String,
}
