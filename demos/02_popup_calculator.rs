/// popup calculator - keypad entry with persisted history
use interest_desk::{AppConfig, AppContext, SafeTimeProvider, TimeSource};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let time = SafeTimeProvider::new(TimeSource::System);
    let mut app = AppContext::from_config(AppConfig::default(), time)?;

    let calc = app.popup_mut();
    calc.press_key("1,00,000");
    calc.press_operator("*");
    calc.press_key("3");
    calc.press_operator("/");
    calc.press_key("1000");
    let expression = calc.input().to_string();
    let value = calc.equals()?;
    println!("{expression} = {value}");

    calc.set_input("(12.5 + 7.5) * -2");
    calc.equals()?;

    calc.set_input("alert(1)");
    if let Err(e) = calc.equals() {
        println!("rejected: {e}");
    }

    for line in calc.history_lines() {
        println!("  {line}");
    }

    Ok(())
}
