#[macro_use]
extern crate rocket;

#[launch]
fn rocket() -> _ {
    fantasy_music::build_rocket()
}
