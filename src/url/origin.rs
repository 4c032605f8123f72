use url::Url;

/// The configured site root, used for same-origin filtering and for
/// resolving relative hrefs discovered on pages
///
/// "Same origin" here means sharing the exact configured root prefix, so a
/// root of `https://blog.example.com/` never admits a lookalike host.
#[derive(Debug, Clone)]
pub struct SiteOrigin {
    root: Url,
}

impl SiteOrigin {
    /// Creates a site origin from the configured root URL
    ///
    /// The root path is forced to end with `/` so prefix checks cannot be
    /// fooled by partial host or path matches.
    pub fn new(root: &str) -> Result<Self, url::ParseError> {
        let mut root = Url::parse(root)?;
        if !root.path().ends_with('/') {
            let path = format!("{}/", root.path());
            root.set_path(&path);
        }
        Ok(Self { root })
    }

    /// Returns the root URL
    pub fn root(&self) -> &Url {
        &self.root
    }

    /// Returns true if the URL lives under the configured site root
    pub fn contains(&self, url: &Url) -> bool {
        url.as_str() == self.root.as_str() || url.as_str().starts_with(self.root.as_str())
    }

    /// Resolves an href attribute to an absolute URL under any origin
    ///
    /// Returns None for hrefs that should never be followed: empty strings,
    /// fragment-only anchors, and non-navigational schemes. Fragments on
    /// otherwise usable URLs are stripped so the same page is not queued
    /// once per anchor.
    pub fn resolve(&self, href: &str) -> Option<Url> {
        let href = href.trim();

        if href.is_empty() || href.starts_with('#') {
            return None;
        }

        if href.starts_with("javascript:")
            || href.starts_with("mailto:")
            || href.starts_with("tel:")
            || href.starts_with("data:")
        {
            return None;
        }

        let mut url = self.root.join(href).ok()?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return None;
        }

        url.set_fragment(None);
        Some(url)
    }
}
