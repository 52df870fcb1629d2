use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "ssr")] {
        use anyhow::Context;
        use axum::Router;
        use leptos_axum::{generate_route_list, LeptosRoutes};
        use podcast_preview::app::*;
        use podcast_preview::config;

        #[tokio::main]
        async fn main() -> anyhow::Result<()> {
            let leptos_options = config::load()?;
            let addr = leptos_options.site_addr;
            let routes = generate_route_list(App);

            let app = Router::new()
                .leptos_routes(&leptos_options, routes, {
                    let leptos_options = leptos_options.clone();
                    move || shell(leptos_options.clone())
                })
                .fallback(leptos_axum::file_and_error_handler(shell))
                .with_state(leptos_options);

            log::info!("Starting server at {}", addr);

            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("failed to bind {}", addr))?;
            log::info!("listening on http://{}", &addr);
            axum::serve(listener, app.into_make_service())
                .await
                .context("server stopped")?;
            Ok(())
        }
    } else {
        pub fn main() {
            // no client-side main function
            // see lib.rs for hydration function instead
        }
    }
}
