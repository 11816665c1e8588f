use crate::console::Console;
use engine::{Record, SearchableCollection};
use std::collections::BTreeMap;

/// Sentinel inputs accepted at the field and query prompts.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Control {
    Quit,
    Back,
}

fn control(input: &str) -> Option<Control> {
    match input {
        "quit" => Some(Control::Quit),
        "back" => Some(Control::Back),
        _ => None,
    }
}

/// What a prompt produced: either a usable value or a control sentinel.
enum Selection<T> {
    Value(T),
    Control(Control),
}

/// The interactive menu loop: pick a collection, pick a field, enter a
/// query, render the matches. All user interaction goes through the
/// injected [`Console`]; the engine itself never does I/O.
pub struct SearchView<C: Console> {
    console: C,
}

impl<C: Console> SearchView<C> {
    pub fn new(console: C) -> Self {
        Self { console }
    }

    /// Run until the user quits or input ends.
    pub fn run(&mut self, collections: &BTreeMap<String, SearchableCollection>) {
        self.show_intro();
        while self.search_collections(collections) != Control::Quit {}
    }

    fn show_intro(&mut self) {
        self.console.say("Welcome to record search.");
        self.console.say("\tType \"back\" at any prompt to go back.");
        self.console.say("\tType \"quit\" at any prompt to quit.");
    }

    /// One pass through collection selection. `Back` from an inner prompt
    /// lands here again; `Quit` unwinds out of `run`.
    fn search_collections(
        &mut self,
        collections: &BTreeMap<String, SearchableCollection>,
    ) -> Control {
        let Some(collection) = self.select_collection(collections) else {
            return Control::Quit;
        };
        loop {
            match self.search_once(collection) {
                None => {}
                Some(ctrl) => return ctrl,
            }
        }
    }

    fn select_collection<'a>(
        &mut self,
        collections: &'a BTreeMap<String, SearchableCollection>,
    ) -> Option<&'a SearchableCollection> {
        let names: Vec<&str> = collections.keys().map(String::as_str).collect();
        loop {
            self.console.say("Select a collection to search:");
            for (i, name) in names.iter().enumerate() {
                self.console.say(&format!("\t{}) {}", i + 1, name));
            }
            self.console.say("\t0) Quit");
            let input = self.console.prompt("Collection number: ")?;
            let input = input.trim();
            if control(input) == Some(Control::Quit) {
                return None;
            }
            match input.parse::<usize>() {
                Ok(0) => return None,
                Ok(n) if n <= names.len() => return collections.get(names[n - 1]),
                _ => self.console.say("Invalid input"),
            }
        }
    }

    /// One field/query/render round. `None` means keep searching the same
    /// collection.
    fn search_once(&mut self, collection: &SearchableCollection) -> Option<Control> {
        let field = match self.select_field(collection) {
            Selection::Value(field) => field,
            Selection::Control(ctrl) => return Some(ctrl),
        };
        let query = match self.prompt_query() {
            Selection::Value(query) => query,
            Selection::Control(ctrl) => return Some(ctrl),
        };
        let results = collection.search(&field, &query);
        self.show_results(&results);
        None
    }

    fn select_field(&mut self, collection: &SearchableCollection) -> Selection<String> {
        let catalog = collection.fields();
        self.console.say("Please select from the following:");
        self.console.say(&format!("\t{}", catalog.join(", ")));
        self.console.say("or enter \"quit\" or \"back\".");
        loop {
            let Some(input) = self.console.prompt("Select a field to search: ") else {
                return Selection::Control(Control::Quit);
            };
            let input = input.trim();
            if let Some(ctrl) = control(input) {
                return Selection::Control(ctrl);
            }
            if catalog.iter().any(|field| field == input) {
                return Selection::Value(input.to_string());
            }
            self.console.say("Invalid input");
        }
    }

    fn prompt_query(&mut self) -> Selection<String> {
        let Some(input) = self.console.prompt("Enter a search query: ") else {
            return Selection::Control(Control::Quit);
        };
        match control(input.trim()) {
            Some(ctrl) => Selection::Control(ctrl),
            // anything else, the empty string included, is a literal query
            None => Selection::Value(input),
        }
    }

    fn show_results(&mut self, results: &[&Record]) {
        if results.is_empty() {
            self.console.say("No results found for search.");
            return;
        }
        self.console.say("Search Results:");
        self.console.say("");
        for record in results {
            for (name, value) in record.iter() {
                self.console.say(&format!("{name}: {value}"));
            }
            self.console.say("");
        }
    }
}
