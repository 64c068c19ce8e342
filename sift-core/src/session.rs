use anyhow::Context;
use tracing::{debug, info};

use crate::{
    config::FinderConfig,
    event::{Event, InputSource},
    matcher::matches,
    render::{Frame, Renderer, Row},
    viewport::{Dimensions, Viewport},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Editing,
    /// Holds the original index of the chosen candidate.
    Confirmed(usize),
    Cancelled,
}

impl State {
    pub fn is_terminal(self) -> bool {
        !matches!(self, State::Editing)
    }
}

/// Query, filtered view and selection cursor of one interactive pick.
///
/// The filtered view stores original indices and is rebuilt from the full
/// candidate list on every query edit, so it always keeps input order.
pub struct Session<'a, S> {
    candidates: &'a [S],
    query: String,
    view: Vec<usize>,
    cursor: usize,
    state: State,
    viewport: Viewport,
}

impl<'a, S: AsRef<str>> Session<'a, S> {
    pub fn new(candidates: &'a [S]) -> Self {
        Self {
            candidates,
            query: String::new(),
            view: (0..candidates.len()).collect(),
            cursor: 0,
            state: State::Editing,
            viewport: Viewport::default(),
        }
    }

    /// Starts a session as if `query` had been typed.
    pub fn with_query(candidates: &'a [S], query: &str) -> Self {
        let mut session = Self::new(candidates);
        for c in query.chars() {
            session.handle(Event::Char(c));
        }
        session
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Original indices of the candidates currently matching the query.
    pub fn view(&self) -> &[usize] {
        &self.view
    }

    pub fn filtered(&self) -> Vec<&'a str> {
        self.view.iter().map(|&i| self.text(i)).collect()
    }

    /// Candidate under the cursor, if anything matches.
    pub fn selected(&self) -> Option<&'a str> {
        self.view.get(self.cursor).map(|&i| self.text(i))
    }

    /// The confirmed candidate once the session has ended with one.
    pub fn outcome(&self) -> Option<&'a str> {
        match self.state {
            State::Confirmed(i) => Some(self.text(i)),
            _ => None,
        }
    }

    fn text(&self, index: usize) -> &'a str {
        let candidates: &'a [S] = self.candidates;
        candidates[index].as_ref()
    }

    /// Applies one event and returns the resulting state. Events arriving
    /// after the session ended are ignored.
    pub fn handle(&mut self, event: Event) -> State {
        if self.state.is_terminal() {
            return self.state;
        }

        match event {
            Event::Char(c) => {
                self.query.push(c);
                self.refilter();
            }
            Event::Erase => {
                if self.query.pop().is_some() {
                    self.refilter();
                }
            }
            Event::Up => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
            }
            Event::Down => {
                if self.cursor + 1 < self.view.len() {
                    self.cursor += 1;
                }
            }
            Event::Confirm => {
                if let Some(&index) = self.view.get(self.cursor) {
                    info!(index, "candidate confirmed");
                    self.state = State::Confirmed(index);
                } else {
                    debug!("confirm ignored, nothing matches");
                }
            }
            Event::Cancel => {
                info!("selection cancelled");
                self.state = State::Cancelled;
            }
        }

        self.state
    }

    fn refilter(&mut self) {
        let query = self.query.as_str();
        self.view = self
            .candidates
            .iter()
            .enumerate()
            .filter(|(_, c)| matches(c.as_ref(), query))
            .map(|(i, _)| i)
            .collect();

        // clamp by position, the cursor does not follow the old candidate
        self.cursor = self.cursor.min(self.view.len().saturating_sub(1));

        debug!(
            query = %self.query,
            matched = self.view.len(),
            cursor = self.cursor,
            "view refiltered"
        );
    }

    /// Builds the visible window around the cursor for the given space.
    pub fn frame<'s>(&'s mut self, prompt: &'s str, dims: Dimensions) -> Frame<'s> {
        let window = self
            .viewport
            .follow(self.cursor, self.view.len(), dims.rows());

        let rows = window
            .map(|pos| {
                let index = self.view[pos];
                Row {
                    index,
                    text: self.text(index),
                    selected: pos == self.cursor,
                }
            })
            .collect();

        Frame {
            prompt,
            query: &self.query,
            rows,
            matched: self.view.len(),
            total: self.candidates.len(),
            width: dims.width(),
        }
    }

    /// Render, wait for input, apply, until the session ends.
    pub fn run<I, R>(
        &mut self,
        config: &FinderConfig,
        input: &mut I,
        renderer: &mut R,
    ) -> anyhow::Result<Option<&'a str>>
    where
        I: InputSource + ?Sized,
        R: Renderer + ?Sized,
    {
        while !self.state.is_terminal() {
            let dims = renderer
                .dimensions()?
                .limit_rows(config.max_rows);
            renderer
                .render(&self.frame(&config.prompt, dims))
                .context("failed to render finder")?;

            if let Some(event) = input.next_event()? {
                debug!(?event, "input");
                self.handle(event);
            }
        }

        Ok(self.outcome())
    }
}

/// Runs a finder over `candidates` with default settings and returns the
/// confirmed candidate, or `None` when the user cancelled.
pub fn run<S, I, R>(candidates: &[S], input: I, renderer: R) -> anyhow::Result<Option<String>>
where
    S: AsRef<str>,
    I: InputSource,
    R: Renderer,
{
    run_with_config(candidates, &FinderConfig::default(), input, renderer)
}

pub fn run_with_config<S, I, R>(
    candidates: &[S],
    config: &FinderConfig,
    mut input: I,
    mut renderer: R,
) -> anyhow::Result<Option<String>>
where
    S: AsRef<str>,
    I: InputSource,
    R: Renderer,
{
    config.validate()?;

    let mut session = Session::with_query(candidates, &config.query);
    let picked = session.run(config, &mut input, &mut renderer)?;

    Ok(picked.map(str::to_string))
}
