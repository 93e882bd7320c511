//! Records decoded from the navigation control (`.ncx`) document.

/// The navigation document.
///
/// `src` values are kept as written, relative to the navigation document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ncx {
    /// Text of `docTitle`.
    pub title: String,
    /// Top-level `navPoint` entries of the `navMap`.
    pub nav_map: Vec<NavPoint>,
    /// `pageTarget` entries of the `pageList`.
    pub page_list: Vec<PageTarget>,
    pub nav_lists: Vec<NavList>,
}

impl Ncx {
    /// All nav points of the `navMap`, depth-first in document order.
    pub fn flatten(&self) -> Vec<&NavPoint> {
        fn walk<'a>(points: &'a [NavPoint], out: &mut Vec<&'a NavPoint>) {
            for point in points {
                out.push(point);
                walk(&point.children, out);
            }
        }

        let mut out = Vec::new();
        walk(&self.nav_map, &mut out);
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavPoint {
    pub id: Option<String>,
    pub play_order: Option<u32>,
    pub label: String,
    pub src: String,
    pub children: Vec<NavPoint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageTarget {
    pub id: Option<String>,
    /// The `type` attribute: `front`, `normal` or `special`.
    pub kind: Option<String>,
    pub value: Option<String>,
    pub play_order: Option<u32>,
    pub label: String,
    pub src: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavList {
    pub label: String,
    pub targets: Vec<NavTarget>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavTarget {
    pub id: Option<String>,
    pub label: String,
    pub src: String,
}
