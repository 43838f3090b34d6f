//! Built-in stories shown when the stories endpoint is unreachable.

use super::types::{Story, StoryMedia};

const FALLBACK_VIDEO: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

const FALLBACK_ROWS: [(&str, &str, &str, &str); 5] = [
    ("story-1", "María González", "Compradora de Primera Vivienda", "/assets/images/story-1.jpg"),
    ("story-2", "Carlos Rodríguez", "Inversionista Inmobiliario", "/assets/images/story-2.jpg"),
    ("story-3", "Ana Martínez", "Vendedora de Propiedad", "/assets/images/story-3.jpg"),
    ("story-4", "Roberto Silva", "Comprador Internacional", "/assets/images/story-4.jpg"),
    ("story-5", "Laura Fernández", "Relocación Familiar", "/assets/images/story-5.jpg"),
];

/// The fixed fallback dataset, in display order.
#[must_use]
pub fn fallback_stories() -> Vec<Story> {
    FALLBACK_ROWS
        .iter()
        .map(|(id, name, job, image)| Story {
            id: (*id).to_owned(),
            name: (*name).to_owned(),
            position_job: Some((*job).to_owned()),
            media: StoryMedia::Image((*image).to_owned()),
            video_link: Some(FALLBACK_VIDEO.to_owned()),
        })
        .collect()
}
