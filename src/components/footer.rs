use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::anchor::AnchorLink;
use crate::config::Business;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub business: Business,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = Local::now().year();
    let Business { name, phone, email, address, .. } = &props.business;

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-brand">
                    <h3>{name}</h3>
                    <p>{address}</p>
                </div>
                <div class="footer-links">
                    <AnchorLink href="#services">{"Services"}</AnchorLink>
                    <AnchorLink href="#gallery">{"Gallery"}</AnchorLink>
                    <AnchorLink href="#contact">{"Contact"}</AnchorLink>
                </div>
                <div class="footer-contact">
                    <a href={format!("tel:{}", phone.replace(' ', ""))}>{phone}</a>
                    <a href={format!("mailto:{}", email)}>{email}</a>
                </div>
            </div>
            <p class="footer-copy">{format!("© {} {}. All rights reserved.", year, name)}</p>
            <style>
                {r#"
                .site-footer {
                    background: #111;
                    color: rgba(255, 255, 255, 0.75);
                    padding: 3rem 2rem 1.5rem;
                }
                .footer-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: space-between;
                    gap: 2rem;
                }
                .footer-links, .footer-contact {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .site-footer a {
                    color: rgba(255, 255, 255, 0.75);
                    text-decoration: none;
                }
                .site-footer a:hover {
                    color: #fff;
                }
                .footer-copy {
                    text-align: center;
                    font-size: 0.85rem;
                    margin-top: 2rem;
                }
                "#}
            </style>
        </footer>
    }
}
