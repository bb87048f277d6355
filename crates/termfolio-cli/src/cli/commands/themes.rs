use termfolio_core::theme::Theme;

pub fn list() {
    for theme in Theme::all() {
        println!("{theme}");
    }
}
