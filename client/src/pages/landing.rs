//! Landing page: every marketing section in order.

use leptos::prelude::*;

use crate::components::{
    about::About, blog::Blog, contact::Contact, destinations::Destinations, footer::Footer, hero::Hero,
    navbar::Navbar, properties::Properties, stories::Stories,
};

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <Navbar/>
        <main class="landing">
            <Hero/>
            <About/>
            <Stories/>
            <Properties/>
            <Destinations/>
            <Blog/>
            <Contact/>
        </main>
        <Footer/>
    }
}
