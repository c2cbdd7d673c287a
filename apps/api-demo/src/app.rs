//! Screen stack and command routing.

use std::rc::Rc;

use glass_cards::CardView;
use glass_core::{RuntimeHandle, SoundEffect, SoundPlayer};

use crate::command::Command;
use crate::screens::{MainMenuScreen, Screen, Transition};

/// Services shared by every screen.
#[derive(Clone)]
pub struct DemoContext {
    pub runtime: RuntimeHandle,
    pub sounds: Rc<dyn SoundPlayer>,
    /// Seeds the random action picked for inserted cards.
    pub seed: u64,
}

impl DemoContext {
    pub fn new(runtime: RuntimeHandle, sounds: Rc<dyn SoundPlayer>, seed: u64) -> Self {
        Self {
            runtime,
            sounds,
            seed,
        }
    }

    pub fn play(&self, effect: SoundEffect) {
        self.sounds.play(effect);
    }
}

/// What the input loop should do after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Run frames for this many milliseconds.
    Wait(u64),
    Quit,
}

pub struct ApiDemo {
    context: DemoContext,
    stack: Vec<Box<dyn Screen>>,
}

impl ApiDemo {
    /// Opens the main menu.
    pub fn new(context: DemoContext) -> Self {
        let mut main_menu: Box<dyn Screen> = Box::new(MainMenuScreen::new(&context));
        main_menu.resume();
        Self {
            context,
            stack: vec![main_menu],
        }
    }

    pub fn context(&self) -> &DemoContext {
        &self.context
    }

    pub fn handle(&mut self, command: Command) -> Flow {
        let Some(screen) = self.stack.last_mut() else {
            return Flow::Quit;
        };
        let transition = match command {
            Command::Tap => screen.tap(&self.context),
            Command::Back => screen.back(&self.context),
            Command::Next => {
                if !screen.host().swipe_forward() {
                    log::debug!("no card after {:?}", screen.host().selected_position());
                }
                Transition::Stay
            }
            Command::Prev => {
                if !screen.host().swipe_back() {
                    log::debug!("no card before {:?}", screen.host().selected_position());
                }
                Transition::Stay
            }
            Command::Say(phrase) => {
                if !screen.voice(&phrase, &self.context) {
                    log::warn!("voice command `{phrase}` not accepted on {}", screen.title());
                }
                Transition::Stay
            }
            Command::Wait(millis) => return Flow::Wait(millis),
            Command::Show => Transition::Stay,
            Command::Quit => return Flow::Quit,
        };
        self.apply(transition)
    }

    fn apply(&mut self, transition: Transition) -> Flow {
        match transition {
            Transition::Stay => Flow::Continue,
            Transition::Push(mut screen) => {
                if let Some(top) = self.stack.last_mut() {
                    top.pause();
                }
                log::debug!("opening {}", screen.title());
                screen.resume();
                self.stack.push(screen);
                Flow::Continue
            }
            Transition::Pop => {
                if let Some(mut top) = self.stack.pop() {
                    top.pause();
                    log::debug!("closing {}", top.title());
                }
                match self.stack.last_mut() {
                    Some(screen) => {
                        screen.resume();
                        Flow::Continue
                    }
                    None => Flow::Quit,
                }
            }
        }
    }

    /// Number of open screens, the main menu included.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn current_title(&self) -> Option<&'static str> {
        self.stack.last().map(|screen| screen.title())
    }

    pub fn current_screen(&self) -> Option<&dyn Screen> {
        self.stack.last().map(|screen| screen.as_ref())
    }

    /// Whether the screen on top is running a card animation.
    pub fn is_animating(&self) -> bool {
        self.stack
            .last()
            .is_some_and(|screen| screen.host().is_animating())
    }

    pub fn current_view(&self) -> Option<CardView> {
        self.stack
            .last()
            .and_then(|screen| screen.host().current_view())
    }

    /// One-line summary of what is on screen.
    pub fn describe(&self) -> String {
        let Some(screen) = self.stack.last() else {
            return "(closed)".to_string();
        };
        let host = screen.host();
        let mut line = format!("[{}]", screen.title());
        match (host.selected_position(), host.current_view()) {
            (Some(position), Some(view)) => {
                line.push_str(&format!(" card {}/{}", position + 1, host.count()));
                line.push_str(&format!(" <{}>", view.layout));
                if let Some(text) = &view.text {
                    line.push_str(&format!(" {text}"));
                }
                if !view.images.is_empty() {
                    line.push_str(&format!(" images: {}", view.images.join(", ")));
                }
                for row in view.visible_rows() {
                    line.push_str(&format!(" | {} {}", row.primary_text, row.secondary_text));
                }
            }
            _ => line.push_str(" (no cards)"),
        }
        if host.is_animating() {
            line.push_str(" (animating)");
        }
        line
    }
}
