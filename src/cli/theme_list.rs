use crate::ui::appearance::Appearance;
use crate::ui::builtin_themes::load_builtin_themes;

pub fn list_themes() -> Result<(), Box<dyn std::error::Error>> {
    let startup = Appearance::default().as_str();

    println!("Built-in themes:\n");
    for t in load_builtin_themes() {
        let mark = if t.id.eq_ignore_ascii_case(startup) {
            "*"
        } else {
            " "
        };
        println!("  {} {} - {}", mark, t.id, t.display_name);
    }

    println!("\nThe interface starts in {startup} mode; Ctrl+T switches.");
    Ok(())
}
