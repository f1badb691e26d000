use super::NavigationService;
use crate::Route;
use dioxus::prelude::*;
use tracing::{info, warn};

/// Navigation over the app router.
#[derive(Clone, Copy)]
pub struct RouterNavigation {
    nav: Navigator,
}

impl RouterNavigation {
    pub fn new(nav: Navigator) -> Self {
        Self { nav }
    }
}

impl NavigationService for RouterNavigation {
    fn navigate_to(&self, destination: &str) {
        match destination.parse::<Route>() {
            Ok(route) => {
                info!("Navigating to {}", destination);
                self.nav.push(route);
            }
            Err(e) => warn!("Cannot navigate to {}: {}", destination, e),
        }
    }
}
