//! Embedding snippet for the `sib-swissbiopics-sl` web component.
//!
//! The component loads its own script and looks up two templates by ID:
//! one for the location list rows and one holding the `<style>` block that
//! gets injected into the diagram's shadow DOM. [`render_page`] produces all
//! three pieces for a [`Surface`].

use std::fmt::Write;

use serde::Serialize;

use crate::error::GoStyleError;
use crate::model::{AnnotationSet, TaxonomyId};
use crate::style::{render_styles, StyleOptions};

/// Script that registers the custom element.
pub const SWISSBIOPICS_SCRIPT: &str = "https://www.swissbiopics.org/static/swissbiopics.js";

/// Rules that apply regardless of the selection.
const BASE_STYLES: &str = "\
ul > li > a {
    font-style: oblique;
}
ul.notpresent li > .subcell_description {
    display: none;
}
svg .subcell_name {
    display: none;
}
svg .subcell_description {
    display: none;
}
";

/// What the visualization component is given: organism, IDs and styles.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Surface {
    pub tax_id: TaxonomyId,
    /// Comma-separated GO IDs for the `gos` attribute.
    pub gos: String,
    pub css: String,
}

impl Surface {
    /// Builds the surface for a set.
    ///
    /// # Errors
    /// Returns [`GoStyleError::NoSelection`] if the set is empty, since the
    /// component has nothing to highlight.
    pub fn new(
        set: &AnnotationSet,
        tax_id: TaxonomyId,
        opts: &StyleOptions,
    ) -> Result<Self, GoStyleError> {
        if set.is_empty() {
            return Err(GoStyleError::NoSelection);
        }
        Ok(Self {
            tax_id,
            gos: set.id_list(),
            css: render_styles(set, opts),
        })
    }
}

/// Renders the HTML snippet that embeds the component.
pub fn render_page(surface: &Surface) -> String {
    let mut html = String::new();

    let _ = writeln!(
        html,
        "<script type=\"module\" src=\"{}\"></script>",
        SWISSBIOPICS_SCRIPT
    );
    html.push_str(
        "<template id=\"sibSwissBioPicsSlLiItem\" style=\"display:none;\">\n\
         \x20   <tr class=\"subcellular_location\" style=\"display:none;\">\n\
         \x20       <td><a class=\"subcell_name\"></a></td>\n\
         \x20       <td class=\"subcell_description\"></td>\n\
         \x20   </tr>\n\
         </template>\n",
    );
    let _ = writeln!(
        html,
        "<sib-swissbiopics-sl taxid=\"{}\" gos=\"{}\"></sib-swissbiopics-sl>",
        surface.tax_id, surface.gos
    );
    html.push_str("<template id=\"sibSwissBioPicsStyle\">\n<style>\n");
    html.push_str(BASE_STYLES);
    html.push_str(&surface.css);
    html.push_str("</style>\n</template>\n");

    html
}
