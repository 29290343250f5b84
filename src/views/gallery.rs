//! The gallery home page.

use crate::{
    config::RemoteConfig,
    models::photo::PhotoRecord,
    services::display::{PhotoLabels, copyright_year},
};
use maud::{DOCTYPE, Markup, html};

const PAGE_TITLE: &str = "Photos";

/// Render every photo, in the order given, into one page.
pub fn home_page(remote: &RemoteConfig, photos: &[PhotoRecord]) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (PAGE_TITLE) }
                link rel="icon" type="image/svg+xml" href="/assets/favicon.svg";
                link rel="stylesheet" href="/assets/style.css";
            }
            body {
                header {
                    h1 { (PAGE_TITLE) }
                }
                main.gallery {
                    @if photos.is_empty() {
                        p.empty { "No photos yet." }
                    }
                    @for photo in photos {
                        (photo_card(remote, photo))
                    }
                }
                footer {
                    "© " (copyright_year())
                }
            }
        }
    }
}

fn photo_card(remote: &RemoteConfig, photo: &PhotoRecord) -> Markup {
    let labels = PhotoLabels::for_photo(remote, photo);
    let details: Vec<&str> = labels.details().collect();

    html! {
        figure.photo id=(photo.id) {
            a href=(labels.asset_url) {
                img src=(labels.preview_url)
                    alt=(photo.title)
                    loading="lazy"
                    width=[known_dimension(photo.width)]
                    height=[known_dimension(photo.height)];
            }
            figcaption {
                @if !photo.title.is_empty() {
                    h2 { (photo.title) }
                }
                @if !photo.description.is_empty() {
                    p.description { (photo.description) }
                }
                @if let Some(taken) = photo.taken_at() {
                    time datetime=(taken.to_rfc3339()) { (labels.taken_at) }
                }
                @if !details.is_empty() {
                    ul.details {
                        @for detail in &details {
                            li { (detail) }
                        }
                    }
                }
            }
        }
    }
}

fn known_dimension(pixels: u32) -> Option<u32> {
    (pixels > 0).then_some(pixels)
}
