use crate::tui::session::Session;
use crate::tui::theme::Theme;
use freq_lens_common::Config;
use freq_lens_core::{
    compute_frequency_distribution, summarize_sorted, ColumnSeries, Distribution, SummaryStats,
};

#[derive(Debug, Clone, PartialEq)]
pub enum SidebarSort {
    Name,
    Count,
    Skipped,
}

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Distribution,
    SortedData,
    Summary,
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Focus {
    Sidebar,
    Main,
}

pub struct App {
    pub input_path: String,
    pub columns: Vec<ColumnSeries>,
    // index-aligned with columns; None only when a series failed to bin
    pub distributions: Vec<Option<Distribution>>,
    pub summaries: Vec<Option<SummaryStats>>,
    pub sidebar_selected: usize,
    pub view: View,
    pub focus: Focus,
    pub data_scroll: usize,
    pub help_scroll: usize,
    pub sidebar_search: String,
    pub sidebar_searching: bool,
    pub sidebar_sort: SidebarSort,
    pub sidebar_sort_asc: bool,
    pub status_msg: String,
    pub should_quit: bool,
    pub theme: Theme,
    pub config: Config,
}

impl App {
    pub fn new(input_path: String, config: Config) -> Self {
        Self {
            input_path,
            columns: Vec::new(),
            distributions: Vec::new(),
            summaries: Vec::new(),
            sidebar_selected: 0,
            view: View::Distribution,
            focus: Focus::Sidebar,
            data_scroll: 0,
            help_scroll: 0,
            sidebar_search: String::new(),
            sidebar_searching: false,
            sidebar_sort: SidebarSort::Name,
            sidebar_sort_asc: true,
            status_msg: String::from("Loading..."),
            should_quit: false,
            theme: Theme::from_name(&config.display.theme),
            config,
        }
    }

    /// Replace all column state wholesale; distributions are computed once
    /// here and never mutated afterwards.
    pub fn load_columns(&mut self, columns: Vec<ColumnSeries>) {
        self.distributions = columns
            .iter()
            .map(|c| match compute_frequency_distribution(&c.values) {
                Ok(d) => Some(d),
                Err(e) => {
                    self.status_msg = format!("{}: {e}", c.name);
                    None
                }
            })
            .collect();
        self.summaries = self
            .distributions
            .iter()
            .map(|d| {
                d.as_ref()
                    .and_then(|d| summarize_sorted(&d.sorted_data).ok())
            })
            .collect();
        self.columns = columns;
        if self.sidebar_selected >= self.columns.len() {
            self.sidebar_selected = 0;
        }
    }

    pub fn select_column_by_name(&mut self, name: &str) {
        let indices = self.filtered_column_indices();
        if let Some(pos) = indices.iter().position(|&i| self.columns[i].name == name) {
            self.sidebar_selected = pos;
            self.focus = Focus::Main;
        } else {
            self.status_msg = format!("column '{name}' not found");
        }
    }

    pub fn selected_column(&self) -> Option<&ColumnSeries> {
        self.filtered_column_indices()
            .get(self.sidebar_selected)
            .and_then(|&i| self.columns.get(i))
    }

    pub fn selected_distribution(&self) -> Option<&Distribution> {
        self.filtered_column_indices()
            .get(self.sidebar_selected)
            .and_then(|&i| self.distributions.get(i))
            .and_then(|d| d.as_ref())
    }

    pub fn selected_summary(&self) -> Option<&SummaryStats> {
        self.filtered_column_indices()
            .get(self.sidebar_selected)
            .and_then(|&i| self.summaries.get(i))
            .and_then(|s| s.as_ref())
    }

    pub fn filtered_column_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.columns.len())
            .filter(|&i| {
                self.sidebar_search.is_empty()
                    || self.columns[i]
                        .name
                        .to_lowercase()
                        .contains(&self.sidebar_search.to_lowercase())
            })
            .collect();
        indices.sort_by(|&a, &b| {
            let ca = &self.columns[a];
            let cb = &self.columns[b];
            let ord = match self.sidebar_sort {
                SidebarSort::Name => ca.name.cmp(&cb.name),
                SidebarSort::Count => ca.values.len().cmp(&cb.values.len()),
                SidebarSort::Skipped => ca.skipped_cells.cmp(&cb.skipped_cells),
            };
            if self.sidebar_sort_asc {
                ord
            } else {
                ord.reverse()
            }
        });
        indices
    }

    pub fn sidebar_down(&mut self) {
        let max = self.filtered_column_indices().len().saturating_sub(1);
        if self.sidebar_selected < max {
            self.sidebar_selected += 1;
            self.data_scroll = 0;
        }
    }

    pub fn sidebar_up(&mut self) {
        if self.sidebar_selected > 0 {
            self.sidebar_selected -= 1;
            self.data_scroll = 0;
        }
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Sidebar => Focus::Main,
            Focus::Main => Focus::Sidebar,
        };
    }

    pub fn scroll_down(&mut self) {
        match self.focus {
            Focus::Sidebar => self.sidebar_down(),
            Focus::Main => {
                let len = self
                    .selected_distribution()
                    .map(|d| d.sorted_data.len())
                    .unwrap_or(0);
                if self.data_scroll + 1 < len {
                    self.data_scroll += 1;
                }
            }
        }
    }

    pub fn scroll_up(&mut self) {
        match self.focus {
            Focus::Sidebar => self.sidebar_up(),
            Focus::Main => self.data_scroll = self.data_scroll.saturating_sub(1),
        }
    }

    pub fn to_session(&self) -> Session {
        let view = match self.view {
            View::Distribution => "distribution",
            View::SortedData => "sorted_data",
            View::Summary => "summary",
            View::Help => "distribution",
        };
        let sort_str = match self.sidebar_sort {
            SidebarSort::Name => "name",
            SidebarSort::Count => "count",
            SidebarSort::Skipped => "skipped",
        };
        Session {
            input_path: self.input_path.clone(),
            sidebar_selected: self.sidebar_selected,
            view: view.into(),
            sidebar_sort: sort_str.into(),
            sidebar_sort_asc: self.sidebar_sort_asc,
        }
    }

    pub fn restore_from_session(&mut self, s: &Session) {
        if s.input_path != self.input_path {
            return;
        }
        self.sidebar_selected = s.sidebar_selected;
        self.view = match s.view.as_str() {
            "sorted_data" => View::SortedData,
            "summary" => View::Summary,
            _ => View::Distribution,
        };
        self.sidebar_sort = match s.sidebar_sort.as_str() {
            "count" => SidebarSort::Count,
            "skipped" => SidebarSort::Skipped,
            _ => SidebarSort::Name,
        };
        self.sidebar_sort_asc = s.sidebar_sort_asc;
    }
}
