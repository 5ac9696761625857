use super::catalog::{Catalog, ProjectId, ProjectRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaItem {
    Image { source: String },
    Video { source: String, poster: Option<String> },
}

impl MediaItem {
    pub fn source(&self) -> &str {
        match self {
            MediaItem::Image { source } | MediaItem::Video { source, .. } => source,
        }
    }

    pub fn is_video(&self) -> bool {
        matches!(self, MediaItem::Video { .. })
    }
}

/// Images first, then videos, each in catalog order. Grid position `i` and
/// lightbox slide `i` refer to the same item.
pub fn media_list(record: &ProjectRecord) -> Vec<MediaItem> {
    let images = record.images.iter().map(|src| MediaItem::Image {
        source: src.clone(),
    });
    let videos = record
        .videos
        .iter()
        .enumerate()
        .map(|(i, src)| MediaItem::Video {
            source: src.clone(),
            poster: record.video_posters.get(i).cloned(),
        });
    images.chain(videos).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDetail<'a> {
    pub record: &'a ProjectRecord,
    pub media: Vec<MediaItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presentation<'a> {
    Found(ProjectDetail<'a>),
    NotFound,
}

impl<'a> Presentation<'a> {
    pub fn found(self) -> Option<ProjectDetail<'a>> {
        match self {
            Presentation::Found(d) => Some(d),
            Presentation::NotFound => None,
        }
    }
}

pub fn present(catalog: &Catalog, id: ProjectId) -> Presentation<'_> {
    match catalog.find_by_id(id) {
        Some(record) => Presentation::Found(ProjectDetail {
            record,
            media: media_list(record),
        }),
        None => {
            log::debug!("no project with id {id}");
            Presentation::NotFound
        }
    }
}

/// Like [`present`], for an id that arrived as text (e.g. from the URL).
pub fn present_route_param<'a>(catalog: &'a Catalog, raw: &str) -> Presentation<'a> {
    match ProjectId::parse(raw) {
        Some(id) => present(catalog, id),
        None => Presentation::NotFound,
    }
}

/// Which slide of a media list is enlarged, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lightbox {
    len: usize,
    index: Option<usize>,
}

impl Lightbox {
    pub fn new(len: usize) -> Self {
        Self { len, index: None }
    }

    /// Opens on exactly the activated item. Out-of-range indices are ignored.
    pub fn open(&mut self, index: usize) -> bool {
        if index < self.len {
            self.index = Some(index);
            true
        } else {
            false
        }
    }

    pub fn close(&mut self) {
        self.index = None;
    }

    pub fn current(&self) -> Option<usize> {
        self.index
    }

    pub fn is_open(&self) -> bool {
        self.index.is_some()
    }

    pub fn next(&mut self) {
        if let Some(i) = self.index {
            self.index = Some((i + 1) % self.len);
        }
    }

    pub fn prev(&mut self) {
        if let Some(i) = self.index {
            self.index = Some(if i == 0 { self.len - 1 } else { i - 1 });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_json(
            r#"[
            {"id": 1, "title": "Both", "short_description": "", "description": "",
             "images": ["/i1.png", "/i2.png", "/i3.png"],
             "videos": ["/v1.mp4", "/v2.mp4"], "video_posters": ["/p1.png"]},
            {"id": 2, "title": "Images only", "short_description": "", "description": "",
             "images": ["/only.png"]},
            {"id": 3, "title": "Nothing", "short_description": "", "description": "",
             "images": []}
        ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_media_images_then_videos_in_order() {
        let catalog = catalog();
        let detail = present(&catalog, ProjectId(1)).found().unwrap();
        let sources: Vec<_> = detail.media.iter().map(MediaItem::source).collect();
        assert_eq!(sources, vec!["/i1.png", "/i2.png", "/i3.png", "/v1.mp4", "/v2.mp4"]);
        assert!(!detail.media[2].is_video());
        assert!(detail.media[3].is_video());
        assert_eq!(
            detail.media[3],
            MediaItem::Video {
                source: "/v1.mp4".into(),
                poster: Some("/p1.png".into())
            }
        );
        assert_eq!(
            detail.media[4],
            MediaItem::Video {
                source: "/v2.mp4".into(),
                poster: None
            }
        );
    }

    #[test]
    fn test_media_length_matches_every_record() {
        let catalog = catalog();
        for record in catalog.iter() {
            let detail = present(&catalog, record.id).found().unwrap();
            assert_eq!(detail.record, record);
            assert_eq!(
                detail.media.len(),
                record.images.len() + record.videos.len()
            );
        }
    }

    #[test]
    fn test_bundled_catalog_media() {
        let catalog = Catalog::bundled();
        for record in catalog.iter() {
            let media = media_list(record);
            assert_eq!(media.len(), record.images.len() + record.videos.len());
            let first_video = media.iter().position(MediaItem::is_video);
            if let Some(i) = first_video {
                assert!(media[i..].iter().all(MediaItem::is_video));
                assert_eq!(i, record.images.len());
            }
        }
    }

    #[test]
    fn test_not_found() {
        let catalog = catalog();
        assert_eq!(present(&catalog, ProjectId(99)), Presentation::NotFound);
        assert_eq!(present_route_param(&catalog, "99"), Presentation::NotFound);
        assert_eq!(present_route_param(&catalog, "not-a-number"), Presentation::NotFound);
        assert!(matches!(
            present_route_param(&catalog, "2"),
            Presentation::Found(ProjectDetail { record, .. }) if record.title == "Images only"
        ));
    }

    #[test]
    fn test_lightbox_opens_on_clicked_item() {
        let catalog = catalog();
        let detail = present(&catalog, ProjectId(1)).found().unwrap();
        let mut lightbox = Lightbox::new(detail.media.len());
        assert!(!lightbox.is_open());

        assert!(lightbox.open(3));
        assert_eq!(lightbox.current(), Some(3));
        assert_eq!(detail.media[lightbox.current().unwrap()].source(), "/v1.mp4");

        assert!(!lightbox.open(5));
        assert_eq!(lightbox.current(), Some(3));
    }

    #[test]
    fn test_lightbox_wraps() {
        let mut lightbox = Lightbox::new(3);
        lightbox.next();
        assert_eq!(lightbox.current(), None);

        lightbox.open(2);
        lightbox.next();
        assert_eq!(lightbox.current(), Some(0));
        lightbox.prev();
        assert_eq!(lightbox.current(), Some(2));
        lightbox.close();
        assert!(!lightbox.is_open());
    }

    #[test]
    fn test_lightbox_empty_list() {
        let mut lightbox = Lightbox::new(0);
        assert!(!lightbox.open(0));
        lightbox.prev();
        assert_eq!(lightbox.current(), None);
    }
}
