//! Derived list computation: the filtered, sorted view of a fetched task
//! collection. Everything here is pure; nothing is persisted.

use std::cmp::Ordering;

use deunicode::deunicode;

use crate::due_date;
use crate::task::{SortKey, Task};

/// Filter `tasks` by `search_term` and sort the survivors by `sort_key`.
pub fn derive<'a>(tasks: &'a [Task], search_term: &str, sort_key: SortKey) -> Vec<&'a Task> {
    let needle = search_term.to_lowercase();
    let mut visible: Vec<&Task> = tasks.iter().filter(|t| matches(t, &needle)).collect();
    sort(&mut visible, sort_key);
    visible
}

/// Case-insensitive substring match on title or description.
/// `needle` must already be lowercased; an empty needle matches everything.
pub fn matches(task: &Task, needle: &str) -> bool {
    needle.is_empty()
        || task.title.to_lowercase().contains(needle)
        || task.description.to_lowercase().contains(needle)
}

pub fn sort(tasks: &mut [&Task], key: SortKey) {
    match key {
        SortKey::DueDate => tasks.sort_by_key(|t| due_date::sort_instant(t.due_date.as_deref())),
        SortKey::Title => tasks.sort_by(|a, b| locale_cmp(&a.title, &b.title)),
        SortKey::Status => tasks.sort_by_key(|t| t.completed),
    }
}

/// Collation-style string comparison.
///
/// Compares first on base letters (transliterated to ASCII and case
/// folded), then on accents, then on case with lowercase ahead of
/// uppercase.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let primary = |s: &str| deunicode(s).to_lowercase();
    let secondary = |s: &str| -> Vec<char> { s.chars().flat_map(char::to_lowercase).collect() };

    primary(a)
        .cmp(&primary(b))
        .then_with(|| secondary(a).cmp(&secondary(b)))
        .then_with(|| tertiary(a, b))
}

fn tertiary(a: &str, b: &str) -> Ordering {
    for (x, y) in a.chars().zip(b.chars()) {
        if x != y {
            return match (x.is_lowercase(), y.is_lowercase()) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => x.cmp(&y),
            };
        }
    }
    a.chars().count().cmp(&b.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(title: &str, description: &str, completed: bool, due: Option<&str>) -> Task {
        Task {
            id: Some(title.to_lowercase().replace(' ', "-")),
            title: title.into(),
            description: description.into(),
            completed,
            due_date: due.map(String::from),
        }
    }

    fn titles(tasks: &[&Task]) -> Vec<String> {
        tasks.iter().map(|t| t.title.clone()).collect()
    }

    #[test]
    fn empty_search_keeps_everything() {
        let tasks = vec![task("Buy milk", "", false, None), task("Walk dog", "", false, None)];
        assert_eq!(derive(&tasks, "", SortKey::Title).len(), 2);
    }

    #[test]
    fn search_is_case_insensitive_on_title() {
        let tasks = vec![task("Buy milk", "", false, None), task("Walk dog", "", false, None)];
        assert_eq!(titles(&derive(&tasks, "MILK", SortKey::Title)), vec!["Buy milk"]);
        assert_eq!(titles(&derive(&tasks, "mIlK", SortKey::Title)), vec!["Buy milk"]);
    }

    #[test]
    fn search_matches_description() {
        let tasks = vec![
            task("Errands", "pick up Milk and bread", false, None),
            task("Walk dog", "", false, None),
        ];
        assert_eq!(titles(&derive(&tasks, "milk", SortKey::Title)), vec!["Errands"]);
    }

    #[test]
    fn every_title_substring_finds_its_task() {
        let tasks = vec![
            task("Buy Milk", "", false, None),
            task("Walk dog", "", false, None),
            task("Écrire rapport", "", true, Some("2024-02-01")),
        ];
        for t in &tasks {
            let chars: Vec<char> = t.title.chars().collect();
            for start in 0..chars.len() {
                for end in start + 1..=chars.len() {
                    let sub: String = chars[start..end].iter().collect();
                    let found = derive(&tasks, &sub.to_uppercase(), SortKey::DueDate);
                    assert!(
                        found.iter().any(|f| f.id == t.id),
                        "{sub:?} should find {:?}",
                        t.title
                    );
                }
            }
        }
    }

    #[test]
    fn due_date_sort_puts_missing_first() {
        let tasks = vec![
            task("March", "", false, Some("2024-03-01")),
            task("None", "", false, None),
            task("January", "", false, Some("2024-01-01")),
        ];
        assert_eq!(
            titles(&derive(&tasks, "", SortKey::DueDate)),
            vec!["None", "January", "March"]
        );
    }

    #[test]
    fn invalid_due_date_sorts_like_missing() {
        let tasks = vec![
            task("Valid", "", false, Some("2023-06-01")),
            task("Garbage", "", false, Some("someday")),
        ];
        assert_eq!(
            titles(&derive(&tasks, "", SortKey::DueDate)),
            vec!["Garbage", "Valid"]
        );
    }

    #[test]
    fn due_date_sort_mixes_dates_and_timestamps() {
        let tasks = vec![
            task("Afternoon", "", false, Some("2024-01-01T15:00:00Z")),
            task("Midnight", "", false, Some("2024-01-01")),
        ];
        assert_eq!(
            titles(&derive(&tasks, "", SortKey::DueDate)),
            vec!["Midnight", "Afternoon"]
        );
    }

    #[test]
    fn title_sort_ignores_case_and_accents() {
        let tasks = vec![
            task("banana", "", false, None),
            task("Été", "", false, None),
            task("apple", "", false, None),
            task("Cherry", "", false, None),
            task("eagle", "", false, None),
        ];
        assert_eq!(
            titles(&derive(&tasks, "", SortKey::Title)),
            vec!["apple", "banana", "Cherry", "eagle", "Été"]
        );
    }

    #[test]
    fn locale_cmp_orders_lowercase_before_uppercase_on_ties() {
        assert_eq!(locale_cmp("a", "A"), Ordering::Less);
        assert_eq!(locale_cmp("A", "a"), Ordering::Greater);
        assert_eq!(locale_cmp("A", "b"), Ordering::Less);
        assert_eq!(locale_cmp("e", "é"), Ordering::Less);
        assert_eq!(locale_cmp("abc", "abc"), Ordering::Equal);
        assert_eq!(locale_cmp("ab", "abc"), Ordering::Less);
    }

    #[test]
    fn accented_letters_sort_with_their_base_letter() {
        assert_eq!(locale_cmp("Šaty", "Sbor"), Ordering::Less);
        assert_eq!(locale_cmp("Ōsaka", "Paris"), Ordering::Less);
        assert_eq!(locale_cmp("Żaba", "Zebra"), Ordering::Less);
        assert_eq!(locale_cmp("Łódź", "Lyon"), Ordering::Less);
        assert_eq!(locale_cmp("Ăla", "Alb"), Ordering::Less);
        assert_eq!(locale_cmp("Győr", "Gyula"), Ordering::Less);
    }

    #[test]
    fn title_sort_interleaves_central_european_names() {
        let tasks = vec![
            task("Zebra", "", false, None),
            task("Żaba", "", false, None),
            task("Sbor", "", false, None),
            task("Šaty", "", false, None),
            task("Łódź trip", "", false, None),
        ];
        assert_eq!(
            titles(&derive(&tasks, "", SortKey::Title)),
            vec!["Łódź trip", "Šaty", "Sbor", "Żaba", "Zebra"]
        );
    }

    #[test]
    fn status_sort_puts_incomplete_first() {
        let tasks = vec![
            task("Done one", "", true, None),
            task("Open one", "", false, None),
            task("Done two", "", true, None),
            task("Open two", "", false, None),
        ];
        let sorted = derive(&tasks, "", SortKey::Status);
        let first_done = sorted.iter().position(|t| t.completed).unwrap();
        assert!(sorted[..first_done].iter().all(|t| !t.completed));
        assert!(sorted[first_done..].iter().all(|t| t.completed));
        assert_eq!(first_done, 2);
    }

    #[test]
    fn search_respects_active_sort() {
        let tasks = vec![task("Walk dog", "", false, None), task("Buy milk", "", false, None)];
        assert_eq!(
            titles(&derive(&tasks, "", SortKey::Title)),
            vec!["Buy milk", "Walk dog"]
        );
        assert_eq!(titles(&derive(&tasks, "milk", SortKey::Title)), vec!["Buy milk"]);
    }
}
