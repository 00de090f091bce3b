use yew::prelude::*;

use crate::assets::{ BRAND_HREF, BRAND_TITLE, LOGO_ALT, LOGO_FOOTER };
use crate::components::{ Container, LinkComponent };

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
          <Container class={classes!("footer__container")}>
            <img src={LOGO_FOOTER} alt={LOGO_ALT} />
            <LinkComponent href={BRAND_HREF} title={BRAND_TITLE} class={classes!("footer__brand")} />
          </Container>
        </footer>
    }
}
