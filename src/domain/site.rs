//! Static texts of the portfolio page.
//!
//! Everything on the page that is not a gallery item: the brand mark, the
//! hero copy, the about section and the contact address. Defaults reproduce
//! the published portfolio; deployments override individual fields through
//! [`Config`](crate::Config).

use serde::{Deserialize, Serialize};

/// Site copy rendered around the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfo {
    /// Short mark shown at the top left of the header.
    pub brand: String,
    /// Name used in the copyright line.
    pub owner: String,
    /// Hero headline.
    pub title: String,
    /// Small caps line above the headline.
    pub tagline: String,
    /// Paragraph below the headline.
    pub subtitle: String,
    /// Heading of the about section.
    pub about_heading: String,
    /// Quotation shown in the about section.
    pub quote: String,
    /// Attribution of the quotation.
    pub quote_author: String,
    /// Biography paragraph.
    pub bio: String,
    /// Address behind the contact link.
    pub contact_email: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            brand: "ma.".to_string(),
            owner: "Mo Amin".to_string(),
            title: "mo amin".to_string(),
            tagline: "Photography Portfolio".to_string(),
            subtitle: "Capturing moments of stillness in an ever-changing world. \
                       Specializing in street, portrait, and architectural photography."
                .to_string(),
            about_heading: "The Photographer".to_string(),
            quote: "Look and think before opening the shutter. \
                    The heart and mind are the true lens of the camera."
                .to_string(),
            quote_author: "Yousuf Karsh".to_string(),
            bio: "Based in New York City, I'm a hobbiest who enjoys capturing moments of all sizes. \
                  Currently, I'm shooting with the Sony A7III."
                .to_string(),
            contact_email: "mamin.create@gmail.com".to_string(),
        }
    }
}

impl SiteInfo {
    /// Copyright line for the footer.
    ///
    /// # Example
    ///
    /// ```rust
    /// use folio::domain::SiteInfo;
    ///
    /// let site = SiteInfo::default();
    /// assert_eq!(
    ///     site.copyright(2024),
    ///     "© 2024 Mo Amin Photography. All Rights Reserved."
    /// );
    /// ```
    #[must_use]
    pub fn copyright(&self, year: i32) -> String {
        format!("© {year} {} Photography. All Rights Reserved.", self.owner)
    }
}
