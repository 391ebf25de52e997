use std::rc::Rc;

use yew::prelude::*;

use crate::components::{
    anchor::AnchorLink, back_to_top::BackToTop, contact_form::ContactForm, footer::Footer,
    gallery::Gallery, reveal::Reveal, testimonials::Testimonials,
};
use crate::config::SiteConfig;

#[function_component(Home)]
pub fn home() -> Html {
    let config = use_context::<Rc<SiteConfig>>().unwrap_or_default();
    let SiteConfig { business, timing, services, gallery, testimonials } = &*config;

    html! {
        <>
            <section id="home" class="hero">
                <div class="hero-overlay"></div>
                <div class="hero-content">
                    <Reveal animation="fade-down">
                        <h1>{&business.name}</h1>
                        <p>{&business.tagline}</p>
                    </Reveal>
                    <Reveal animation="fade-up">
                        <div class="hero-buttons">
                            <AnchorLink href="#contact" class="btn btn-primary">{"Book Your Car In"}</AnchorLink>
                            <AnchorLink href="#services" class="btn btn-outline">{"Our Services"}</AnchorLink>
                        </div>
                    </Reveal>
                </div>
            </section>

            <section id="services" class="section">
                <Reveal class="section-header">
                    <h2>{"Our Services"}</h2>
                    <p>{"Everything your car needs, under one roof."}</p>
                </Reveal>
                <div class="services-grid">
                    { for services.iter().enumerate().map(|(index, service)| html! {
                        <Reveal key={index} animation={if index % 2 == 0 { "fade-right" } else { "fade-left" }} class="service-card">
                            <h3>{&service.label}</h3>
                            <p>{&service.summary}</p>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section id="gallery" class="section section-alt">
                <Reveal class="section-header">
                    <h2>{"Our Work"}</h2>
                    <p>{"A few recent jobs from the workshop. Click a photo to see it full size."}</p>
                </Reveal>
                <Gallery entries={gallery.clone()} />
            </section>

            <section id="testimonials" class="section">
                <Reveal class="section-header">
                    <h2>{"What Our Customers Say"}</h2>
                </Reveal>
                <Testimonials entries={testimonials.clone()} auto_advance_ms={timing.auto_advance_ms} />
            </section>

            <section id="contact" class="section section-alt">
                <Reveal class="section-header">
                    <h2>{"Get In Touch"}</h2>
                    <p>{"Tell us what's going on and we'll get back to you with a quote."}</p>
                </Reveal>
                <div class="contact-layout">
                    <Reveal animation="fade-right" class="contact-details">
                        <h3>{"Visit Us"}</h3>
                        <p>{&business.address}</p>
                        <h3>{"Call"}</h3>
                        <p>{&business.phone}</p>
                        <h3>{"Email"}</h3>
                        <p>{&business.email}</p>
                    </Reveal>
                    <Reveal animation="fade-left">
                        <ContactForm services={services.clone()} timing={timing.clone()} />
                    </Reveal>
                </div>
            </section>

            <Footer business={business.clone()} />
            <BackToTop />

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    color: #fff;
                    background: url('/assets/hero.jpg') center / cover no-repeat;
                }
                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.55);
                }
                .hero-content {
                    position: relative;
                    max-width: 760px;
                    padding: 0 1.5rem;
                }
                .hero h1 {
                    font-size: 3.2rem;
                    margin-bottom: 1rem;
                }
                .hero-buttons {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    margin-top: 2rem;
                }
                .btn {
                    display: inline-block;
                    padding: 0.8rem 1.8rem;
                    border-radius: 4px;
                    font-weight: 600;
                    text-decoration: none;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .btn-primary {
                    background: #d62828;
                    color: #fff;
                    border: 2px solid #d62828;
                }
                .btn-primary:disabled {
                    opacity: 0.7;
                    cursor: wait;
                }
                .btn-outline {
                    color: #fff;
                    border: 2px solid #fff;
                }
                .section {
                    padding: 5rem 2rem;
                }
                .section-alt {
                    background: #f5f5f5;
                }
                .section-header {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .services-grid {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 1.5rem;
                }
                .service-card {
                    padding: 2rem;
                    background: #fff;
                    border-radius: 8px;
                    box-shadow: 0 6px 20px rgba(0, 0, 0, 0.06);
                }
                #gallery .gallery-grid,
                .contact-layout {
                    max-width: 1100px;
                    margin: 0 auto;
                }
                .contact-layout {
                    display: grid;
                    grid-template-columns: 1fr 2fr;
                    gap: 3rem;
                }
                .form-group {
                    margin-bottom: 1.2rem;
                }
                .form-group label {
                    display: block;
                    margin-bottom: 0.4rem;
                    font-weight: 600;
                }
                .form-group input,
                .form-group select,
                .form-group textarea {
                    width: 100%;
                    padding: 0.7rem;
                    border: 1px solid #ccc;
                    border-radius: 4px;
                    font: inherit;
                }
                [data-aos] {
                    opacity: 0;
                    transition: opacity 0.8s ease, transform 0.8s ease;
                }
                [data-aos="fade-up"] { transform: translateY(40px); }
                [data-aos="fade-down"] { transform: translateY(-40px); }
                [data-aos="fade-left"] { transform: translateX(40px); }
                [data-aos="fade-right"] { transform: translateX(-40px); }
                [data-aos].aos-animate {
                    opacity: 1;
                    transform: none;
                }
                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 2.2rem;
                    }
                    .contact-layout {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </>
    }
}
