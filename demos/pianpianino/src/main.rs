#![allow(missing_docs)]

use pianino::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pianino::init_logging("pianpianino=info,pianino=info");

    // the browser build renders once on load; the app is not kept alive
    // past `main`, so later browser back/forward is not observed
    #[cfg(target_arch = "wasm32")]
    {
        let mut app = pianpianino::create_app(&ShellConfig::default())?;
        app.mount(pianino::DomHost::new()?)?;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        // prerender: `pianpianino [config.toml]` prints the page for the
        // configured initial path
        let config = match std::env::args().nth(1) {
            Some(path) => ShellConfig::load(path)?,
            None => ShellConfig::default(),
        };

        let mut app = pianpianino::create_app(&config)?;
        app.mount(pianino::MemoryHost::with_element(config.mount_selector.clone()))?;

        println!("{}", app.render()?);
    }

    Ok(())
}
