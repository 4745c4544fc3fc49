use ratatui::Frame;
use ratatui::layout::{Margin, Rect};

use super::App;
use super::components::{
	InputContext, ProgressState, SuggestionListContext, dropdown_height, render_input,
	render_suggestions,
};
use super::state::LoadStatus;

impl<'a> App<'a> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		if area.height == 0 {
			return;
		}

		let prompt_area = Rect::new(area.x, area.y, area.width, 1);
		let loading = self.load_status == LoadStatus::Loading;
		let prompt = render_input(
			frame,
			InputContext {
				search_input: &self.search_input,
				placeholder: &self.config.placeholder,
				area: prompt_area,
				theme: &self.theme,
			},
			ProgressState {
				loading,
				throbber_state: &self.throbber_state,
			},
		);
		self.hit_areas.input = prompt.input;
		self.hit_areas.button = prompt.button;

		if !self.dropdown_visible() {
			self.hit_areas.list = Rect::default();
			self.hit_areas.rows.clear();
			return;
		}

		let height = dropdown_height(&self.suggestions, loading)
			.min(self.max_height)
			.min(area.height - 1);
		let dropdown_area = Rect::new(area.x, area.y + 1, area.width, height);
		let rendered = render_suggestions(
			frame,
			dropdown_area,
			SuggestionListContext {
				suggestions: &self.suggestions,
				selected: self.selected,
				loading,
				theme: &self.theme,
			},
			self.hit_areas.offset,
		);
		self.hit_areas.list = rendered.area;
		self.hit_areas.rows = rendered.rows;
		self.hit_areas.offset = rendered.offset;
	}
}
