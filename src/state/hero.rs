//! Home page hero state.
//!
//! Drives the typing animation of the hero headline and the one-shot
//! "scroll to the contact band" request raised by navbar/CTA actions.

use alora::content::HERO_HEADLINE;

/// Seconds per typed character.
const TYPE_INTERVAL: f64 = 0.1;
/// Delay before typing begins, so the hero has settled first.
const TYPE_DELAY: f64 = 1.0;

/// State for the animated hero section on the Home page.
#[derive(Debug, Clone, Default)]
pub struct HeroState {
    /// Wall-clock time (egui time) when the hero first became visible.
    started_at: Option<f64>,
    /// Pending request to scroll the Home page to the contact band.
    scroll_to_contact: bool,
}

impl HeroState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the hero visible, latching the start time on first call.
    pub fn mark_visible(&mut self, now: f64) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    /// The headline prefix that should be visible at time `now`.
    ///
    /// Always splits on a character boundary; once the full headline has been
    /// typed the answer no longer changes.
    pub fn typed_headline(&self, now: f64) -> &'static str {
        let Some(started) = self.started_at else {
            return "";
        };
        let elapsed = now - started - TYPE_DELAY;
        if elapsed < 0.0 {
            return "";
        }
        let chars = (elapsed / TYPE_INTERVAL) as usize;
        match HERO_HEADLINE.char_indices().nth(chars) {
            Some((byte_index, _)) => &HERO_HEADLINE[..byte_index],
            None => HERO_HEADLINE,
        }
    }

    /// True while the typing animation still needs repaints.
    pub fn is_typing(&self, now: f64) -> bool {
        self.started_at.is_some() && self.typed_headline(now).len() < HERO_HEADLINE.len()
    }

    /// Requests a scroll to the contact band on the next Home render.
    pub fn request_scroll_to_contact(&mut self) {
        self.scroll_to_contact = true;
    }

    /// Consumes a pending scroll request, if any.
    pub fn take_scroll_to_contact(&mut self) -> bool {
        std::mem::take(&mut self.scroll_to_contact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_progresses_over_time() {
        let mut hero = HeroState::new();
        assert_eq!(hero.typed_headline(5.0), "");

        hero.mark_visible(10.0);
        assert_eq!(hero.typed_headline(10.0), "");
        assert_eq!(hero.typed_headline(10.5), "");

        // One second of delay, then one character per interval.
        assert_eq!(hero.typed_headline(11.0 + TYPE_INTERVAL), "W");
        assert_eq!(hero.typed_headline(11.0 + 7.0 * TYPE_INTERVAL), "Welcome");

        assert_eq!(hero.typed_headline(1000.0), HERO_HEADLINE);
        assert!(!hero.is_typing(1000.0));
    }

    #[test]
    fn mark_visible_latches_first_time() {
        let mut hero = HeroState::new();
        hero.mark_visible(10.0);
        hero.mark_visible(50.0);
        assert_eq!(hero.typed_headline(1000.0), HERO_HEADLINE);
        assert_eq!(hero.typed_headline(10.5), "");
    }

    #[test]
    fn scroll_request_is_one_shot() {
        let mut hero = HeroState::new();
        assert!(!hero.take_scroll_to_contact());
        hero.request_scroll_to_contact();
        assert!(hero.take_scroll_to_contact());
        assert!(!hero.take_scroll_to_contact());
    }
}
