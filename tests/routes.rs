use pretty_assertions::assert_eq;
use taskdeck::ui::Route;

#[test]
fn parse_known_paths() {
    assert_eq!(Route::parse("/"), Route::Home);
    assert_eq!(Route::parse("/login"), Route::Login);
    assert_eq!(Route::parse("/register"), Route::Register);
    assert_eq!(Route::parse("/projects"), Route::Projects);
    assert_eq!(Route::parse("/projects/12/tasks"), Route::ProjectTasks(12));
    assert_eq!(Route::parse("projects/12/tasks/"), Route::ProjectTasks(12));
}

#[test]
fn unknown_paths_go_home() {
    assert_eq!(Route::parse("/settings"), Route::Home);
    assert_eq!(Route::parse("/projects/abc/tasks"), Route::Home);
    assert_eq!(Route::parse("/projects/1"), Route::Home);
}

#[test]
fn path_round_trips() {
    for route in [
        Route::Home,
        Route::Login,
        Route::Register,
        Route::Projects,
        Route::ProjectTasks(7),
    ] {
        assert_eq!(Route::parse(&route.path()), route);
    }
    assert_eq!(Route::ProjectTasks(7).to_string(), "/projects/7/tasks");
}

#[test]
fn protected_routes_redirect_to_login() {
    assert_eq!(Route::Projects.resolve(false), Route::Login);
    assert_eq!(Route::ProjectTasks(1).resolve(false), Route::Login);
    assert_eq!(Route::ProjectTasks(1).resolve(true), Route::ProjectTasks(1));
    assert_eq!(Route::Register.resolve(false), Route::Register);
    assert_eq!(Route::Home.resolve(false), Route::Home);
}
