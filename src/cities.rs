use std::io::{BufRead, Write};

/// Curated destinations offered in the interactive menu
pub const MAJOR_CITIES: &[&str] = &[
    "Istanbul",
    "Izmir",
    "Ankara",
    "London",
    "New York",
    "Tokyo",
    "Paris",
    "Berlin",
    "Moscow",
    "Dubai",
    "Singapore",
    "Los Angeles",
    "Barcelona",
    "Rome",
    "Amsterdam",
    "Toronto",
    "Sydney",
    "Seoul",
    "Mumbai",
    "Rio de Janeiro",
    "Cape Town",
    "Bangkok",
    "San Francisco",
];

pub const CUSTOM_OPTION: &str = "Other / Custom Search";

/// What the user picked from the menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    City(String),
    Custom,
    Nothing,
}

/// Interpret one line of menu input.
///
/// A number picks from [`MAJOR_CITIES`] (1-based), the number after the last
/// city picks the custom option, and any other text is taken as a city name.
pub fn parse_selection(input: &str) -> Selection {
    let input = input.trim();
    if input.is_empty() {
        return Selection::Nothing;
    }
    match input.parse::<usize>() {
        Ok(n) if (1..=MAJOR_CITIES.len()).contains(&n) => {
            Selection::City(MAJOR_CITIES[n - 1].to_string())
        }
        Ok(n) if n == MAJOR_CITIES.len() + 1 => Selection::Custom,
        Ok(_) => Selection::Nothing,
        Err(_) if input.eq_ignore_ascii_case("other") || input.eq_ignore_ascii_case("custom") => {
            Selection::Custom
        }
        Err(_) => Selection::City(input.to_string()),
    }
}

/// Trimmed city name, or `None` when nothing was entered.
/// Lookups are only made for names this returns.
pub fn chosen_city(input: Option<String>) -> Option<String> {
    input
        .map(|city| city.trim().to_string())
        .filter(|city| !city.is_empty())
}

/// Menu text listing every option with its number
pub fn menu() -> String {
    let mut lines: Vec<String> = MAJOR_CITIES
        .iter()
        .enumerate()
        .map(|(i, city)| format!("{:>3}. {}", i + 1, city))
        .collect();
    lines.push(format!("{:>3}. {}", MAJOR_CITIES.len() + 1, CUSTOM_OPTION));
    lines.join("\n")
}

/// Ask for a destination on `output`, reading answers from `input`.
/// Returns `None` when nothing usable was entered.
pub fn prompt_city<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> std::io::Result<Option<String>> {
    writeln!(output, "📍 Select Destination:")?;
    writeln!(output, "{}", menu())?;
    write!(output, "Choice (number or city name): ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    match parse_selection(&line) {
        Selection::City(city) => Ok(Some(city)),
        Selection::Nothing => Ok(None),
        Selection::Custom => {
            write!(output, "Enter City Name: ")?;
            output.flush()?;
            let mut custom = String::new();
            input.read_line(&mut custom)?;
            let custom = custom.trim();
            Ok((!custom.is_empty()).then(|| custom.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_number_picks_city() {
        assert_eq!(parse_selection("1"), Selection::City("Istanbul".to_string()));
        assert_eq!(parse_selection(" 4 \n"), Selection::City("London".to_string()));
        assert_eq!(
            parse_selection(&MAJOR_CITIES.len().to_string()),
            Selection::City("San Francisco".to_string())
        );
    }

    #[test]
    fn test_custom_option() {
        assert_eq!(parse_selection(&(MAJOR_CITIES.len() + 1).to_string()), Selection::Custom);
        assert_eq!(parse_selection("Other"), Selection::Custom);
        assert_eq!(parse_selection("custom"), Selection::Custom);
    }

    #[test]
    fn test_out_of_range_and_empty() {
        assert_eq!(parse_selection("0"), Selection::Nothing);
        assert_eq!(parse_selection("99"), Selection::Nothing);
        assert_eq!(parse_selection("   "), Selection::Nothing);
    }

    #[test]
    fn test_free_text_is_a_city() {
        assert_eq!(parse_selection("Kemalpaşa"), Selection::City("Kemalpaşa".to_string()));
    }

    #[test]
    fn test_chosen_city_rejects_blank_input() {
        assert_eq!(chosen_city(None), None);
        assert_eq!(chosen_city(Some(String::new())), None);
        assert_eq!(chosen_city(Some(" \t\n".to_string())), None);
    }

    #[test]
    fn test_chosen_city_trims_name() {
        assert_eq!(chosen_city(Some("  Cape Town \n".to_string())).as_deref(), Some("Cape Town"));
    }

    #[test]
    fn test_menu_lists_custom_last() {
        let menu = menu();
        assert!(menu.starts_with("  1. Istanbul"));
        assert!(menu.ends_with(&format!("{}. {}", MAJOR_CITIES.len() + 1, CUSTOM_OPTION)));
    }

    #[test]
    fn test_prompt_reads_custom_city() {
        let answers = format!("{}\nKemalpaşa\n", MAJOR_CITIES.len() + 1);
        let mut input = Cursor::new(answers.into_bytes());
        let mut output = Vec::new();

        let city = prompt_city(&mut input, &mut output).unwrap();
        assert_eq!(city.as_deref(), Some("Kemalpaşa"));
        assert!(String::from_utf8(output).unwrap().contains("Enter City Name"));
    }

    #[test]
    fn test_prompt_with_no_answer() {
        let mut input = Cursor::new(Vec::new());
        let mut output = Vec::new();
        assert_eq!(prompt_city(&mut input, &mut output).unwrap(), None);
    }
}
