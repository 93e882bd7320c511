//! Records decoded from media overlay (`.smil`) documents.

/// A synchronized-media document.
///
/// Produced on demand by [`Epub::media_overlay`](crate::Epub::media_overlay);
/// never cached.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Smil {
    pub version: Option<String>,
    /// The `body` element, itself a sequence.
    pub body: SmilSeq,
}

impl Smil {
    /// All `par` elements, depth-first in document order.
    pub fn pars(&self) -> Vec<&SmilPar> {
        fn walk<'a>(seq: &'a SmilSeq, out: &mut Vec<&'a SmilPar>) {
            for node in &seq.children {
                match node {
                    SmilNode::Par(par) => out.push(par),
                    SmilNode::Seq(seq) => walk(seq, out),
                }
            }
        }

        let mut out = Vec::new();
        walk(&self.body, &mut out);
        out
    }
}

/// A `seq` (or the `body`) grouping timed children in order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SmilSeq {
    pub id: Option<String>,
    /// `epub:textref`: the content document fragment this sequence covers.
    pub text_ref: Option<String>,
    /// `epub:type`
    pub kind: Option<String>,
    pub children: Vec<SmilNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SmilNode {
    Par(SmilPar),
    Seq(SmilSeq),
}

/// A `par`: a text fragment played in parallel with an audio clip.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SmilPar {
    pub id: Option<String>,
    /// `text@src`
    pub text: Option<String>,
    pub audio: Option<SmilAudio>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SmilAudio {
    pub src: String,
    pub clip_begin: Option<String>,
    pub clip_end: Option<String>,
}
