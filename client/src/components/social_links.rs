//! Social profile links shared by the navbar and the footer.

use leptos::prelude::*;

pub struct SocialLink {
    pub href: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 6] = [
    SocialLink {
        href: "https://www.facebook.com/wwwrubenalfonsocom/?_rdr",
        label: "Síguenos en Facebook - Rubén Alfonso Real Estate",
        icon: "/assets/images/facebook-icon.svg",
    },
    SocialLink {
        href: "https://x.com/RUBENALFONSOG",
        label: "Síguenos en X - Comprando con España",
        icon: "/assets/images/x-icon.svg",
    },
    SocialLink {
        href: "https://www.instagram.com/comprandoconespana/",
        label: "Síguenos en Instagram - Comprando con España",
        icon: "/assets/images/instagram-icon.svg",
    },
    SocialLink {
        href: "https://www.youtube.com/@RUBENALFONSOREALTOR",
        label: "Ver canal en YouTube - Rubén Alfonso",
        icon: "/assets/images/youtube-icon.svg",
    },
    SocialLink {
        href: "https://www.linkedin.com/in/ruben-alfonso-7143334/",
        label: "Conéctate en LinkedIn - Rubén Alfonso",
        icon: "/assets/images/linkedin-icon.svg",
    },
    SocialLink {
        href: "https://wa.me/17862282670",
        label: "Conéctate en WhatsApp - Rubén Alfonso",
        icon: "/assets/images/whatsapp-icon.svg",
    },
];

#[component]
pub fn SocialLinks(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <ul class=format!("social-links {class}") aria-label="Redes sociales">
            {SOCIAL_LINKS
                .iter()
                .map(|link| {
                    view! {
                        <li>
                            <a href=link.href target="_blank" rel="noopener noreferrer" aria-label=link.label>
                                <img src=link.icon alt="" width="24" height="24"/>
                            </a>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
