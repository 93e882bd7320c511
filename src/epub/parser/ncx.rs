use crate::epub::consts::{self, ncx};
use crate::epub::ncx::{NavList, NavPoint, NavTarget, Ncx, PageTarget};
use crate::errors::FormatError;
use crate::parser::ParserResult;
use crate::parser::xml::{XmlEvent, XmlReader, XmlStartElement};

/// An element of the navigation document still awaiting its end tag.
enum Open {
    Point(NavPoint),
    Page(PageTarget),
    List(NavList),
    Target(NavTarget),
}

impl Open {
    fn label_mut(&mut self) -> &mut String {
        match self {
            Self::Point(point) => &mut point.label,
            Self::Page(page) => &mut page.label,
            Self::List(list) => &mut list.label,
            Self::Target(target) => &mut target.label,
        }
    }

    fn src_mut(&mut self) -> Option<&mut String> {
        match self {
            Self::Point(point) => Some(&mut point.src),
            Self::Page(page) => Some(&mut page.src),
            Self::Target(target) => Some(&mut target.src),
            Self::List(_) => None,
        }
    }
}

/// Parses a navigation control (`.ncx`) document.
///
/// Nesting of `navPoint` elements is preserved; labels use the first
/// `navLabel` of an entry.
pub(super) fn parse_ncx(data: &[u8]) -> ParserResult<Ncx> {
    let mut reader = XmlReader::from_bytes(data);
    let mut ncx: Option<Ncx> = None;
    let mut stack: Vec<Open> = Vec::new();

    while let Some(event) = reader.next() {
        match event? {
            XmlEvent::Start(el) => match el.local_name() {
                ncx::NCX => {
                    ncx.get_or_insert_with(Ncx::default);
                }
                ncx::DOC_TITLE if stack.is_empty() => {
                    let title = reader.element_text()?;
                    ncx.get_or_insert_with(Ncx::default).title = title;
                }
                ncx::NAV_POINT => stack.push(Open::Point(NavPoint {
                    id: el.attribute(consts::ID)?,
                    play_order: play_order(&el)?,
                    ..NavPoint::default()
                })),
                ncx::PAGE_TARGET => stack.push(Open::Page(PageTarget {
                    id: el.attribute(consts::ID)?,
                    kind: el.attribute(consts::TYPE)?,
                    value: el.attribute(ncx::VALUE)?,
                    play_order: play_order(&el)?,
                    ..PageTarget::default()
                })),
                ncx::NAV_LIST => stack.push(Open::List(NavList::default())),
                ncx::NAV_TARGET => stack.push(Open::Target(NavTarget {
                    id: el.attribute(consts::ID)?,
                    ..NavTarget::default()
                })),
                ncx::NAV_LABEL => {
                    let text = reader.element_text()?;

                    if let Some(label) = stack.last_mut().map(Open::label_mut)
                        && label.is_empty()
                    {
                        *label = text;
                    }
                }
                ncx::CONTENT => {
                    if let Some(src) = stack.last_mut().and_then(Open::src_mut)
                        && src.is_empty()
                    {
                        *src = el.attribute(consts::SRC)?.unwrap_or_default();
                    }
                }
                _ => {}
            },
            XmlEvent::End(el)
                if [ncx::NAV_POINT, ncx::PAGE_TARGET, ncx::NAV_LIST, ncx::NAV_TARGET]
                    .contains(&el.local_name()) =>
            {
                if let Some(open) = stack.pop() {
                    close(ncx.get_or_insert_with(Ncx::default), &mut stack, open);
                }
            }
            _ => {}
        }
    }

    ncx.ok_or(FormatError::NoNcxFound)
}

/// Attaches a finished entry to its enclosing element, or to the root.
fn close(ncx: &mut Ncx, stack: &mut [Open], open: Open) {
    match (open, stack.last_mut()) {
        (Open::Point(point), Some(Open::Point(parent))) => parent.children.push(point),
        (Open::Point(point), _) => ncx.nav_map.push(point),
        (Open::Page(page), _) => ncx.page_list.push(page),
        (Open::Target(target), Some(Open::List(list))) => list.targets.push(target),
        (Open::Target(target), _) => {
            log::trace!("navTarget `{}` outside of a navList", target.src);
        }
        (Open::List(list), _) => ncx.nav_lists.push(list),
    }
}

/// Invalid `playOrder` values are treated as unspecified.
fn play_order(el: &XmlStartElement) -> ParserResult<Option<u32>> {
    Ok(el
        .attribute(ncx::PLAY_ORDER)?
        .and_then(|order| order.trim().parse().ok()))
}
