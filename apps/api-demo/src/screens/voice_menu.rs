use glass_cards::{Card, CardAdapter, CardLayout};
use glass_core::SoundEffect;
use glass_widget::CardScrollView;

use super::{HostView, Screen, Transition};
use crate::app::DemoContext;

/// Picture shown on the voice menu card, chosen by voice command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VoicePicture {
    #[default]
    Designer,
    Coder(u8),
    Product,
}

impl VoicePicture {
    /// Maps a spoken menu entry to a picture.
    pub fn from_command(command: &str) -> Option<Self> {
        match command.trim() {
            "designer" => Some(VoicePicture::Designer),
            "product" => Some(VoicePicture::Product),
            other => {
                let index = other.strip_prefix("coder")?.parse::<u8>().ok()?;
                (1..=5).contains(&index).then_some(VoicePicture::Coder(index))
            }
        }
    }

    pub fn image(self) -> String {
        match self {
            VoicePicture::Designer => "designer".to_string(),
            VoicePicture::Coder(index) => format!("codemonkey{index}"),
            VoicePicture::Product => "product".to_string(),
        }
    }
}

/// A single card whose picture follows the last voice command. Tapping
/// toggles whether voice commands are accepted.
pub struct VoiceMenuScreen {
    view: CardScrollView<CardAdapter>,
    picture: VoicePicture,
    voice_enabled: bool,
}

fn cards(picture: VoicePicture) -> Vec<Card> {
    vec![Card::new(CardLayout::Text)
        .add_image(picture.image())
        .text("Say a menu entry to change the picture; tap to toggle the voice menu")]
}

impl VoiceMenuScreen {
    pub fn new(context: &DemoContext) -> Self {
        let picture = VoicePicture::default();
        let view = CardScrollView::new(context.runtime.clone());
        view.set_adapter(CardAdapter::new(cards(picture)));
        Self {
            view,
            picture,
            voice_enabled: true,
        }
    }

    pub fn picture(&self) -> VoicePicture {
        self.picture
    }

    pub fn voice_enabled(&self) -> bool {
        self.voice_enabled
    }
}

impl Screen for VoiceMenuScreen {
    fn title(&self) -> &'static str {
        "Voice menu"
    }

    fn host(&self) -> &dyn HostView {
        &self.view
    }

    fn tap(&mut self, context: &DemoContext) -> Transition {
        if self.view.tap().is_some() {
            context.play(SoundEffect::Tap);
            self.voice_enabled = !self.voice_enabled;
            log::debug!("voice menu enabled: {}", self.voice_enabled);
        }
        Transition::Stay
    }

    fn voice(&mut self, command: &str, _context: &DemoContext) -> bool {
        if !self.voice_enabled {
            return false;
        }
        let Some(picture) = VoicePicture::from_command(command) else {
            return false;
        };
        self.picture = picture;
        self.view.set_adapter(CardAdapter::new(cards(picture)));
        true
    }
}
