// src/app.rs
//
// Pavé de la calculatrice — module App (racine)
// ---------------------------------------------
// Rôle:
// - etat.rs : logique du pavé (toujours compilée, testée sans UI)
// - vue.rs  : rendu egui (feature "bureau")
// - impl eframe::App (feature "bureau")

pub mod etat;
#[cfg(feature = "bureau")]
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

#[cfg(feature = "bureau")]
use eframe::egui;

#[cfg(feature = "bureau")]
impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let maintenant = ctx.input(|i| i.time);
        self.tick(maintenant);

        // ESC = AC
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.clear_display();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });

        // "Error" affiché : il faut une image de plus pour l’effacer à l’heure
        if let Some(t) = self.effacement_a {
            let reste = (t - maintenant).max(0.0);
            ctx.request_repaint_after(std::time::Duration::from_secs_f64(reste));
        }
    }
}
