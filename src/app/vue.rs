// src/app/vue.rs
//
// Vue (UI egui) — pavé natif
// --------------------------
// Même disposition que la page web :
//   AC(2) DEL /
//   7 8 9 *
//   4 5 6 -
//   1 2 3 +
//   0(2)  .  =
//
// Clavier : chiffres/opérateurs tapés directement, Enter = "=", Backspace = DEL
// (Escape = AC est géré dans app.rs).

use eframe::egui;

use super::etat::AppCalc;

const TAILLE_TOUCHE: [f32; 2] = [64.0, 48.0];
const ESPACE: f32 = 6.0;

/// Caractères acceptés au clavier (les mêmes que la liste blanche, sans espaces).
const SAISIE_CLAVIER: &str = "0123456789.+-*/()";

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        let maintenant = ui.input(|i| i.time);

        ui.spacing_mut().item_spacing = egui::vec2(ESPACE, ESPACE);

        self.ui_clavier(ui, maintenant);

        ui.heading("Calculatrice");
        ui.add_space(6.0);

        self.ui_affichage(ui);

        ui.add_space(8.0);

        self.ui_pave(ui, maintenant);
    }

    fn ui_affichage(&self, ui: &mut egui::Ui) {
        let couleur = if self.affiche_erreur() {
            ui.visuals().error_fg_color
        } else {
            egui::Color32::from_rgb(74, 222, 128)
        };
        let texte = if self.affichage.is_empty() {
            "0"
        } else {
            self.affichage.as_str()
        };

        // Affichage lecture seule, aligné à droite
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(4.0 * TAILLE_TOUCHE[0] + 3.0 * ESPACE);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(texte)
                            .monospace()
                            .size(28.0)
                            .color(couleur),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        let large = [2.0 * TAILLE_TOUCHE[0] + ESPACE, TAILLE_TOUCHE[1]];

        ui.horizontal(|ui| {
            if ui.add_sized(large, egui::Button::new("AC")).clicked() {
                self.clear_display();
            }
            if ui.add_sized(TAILLE_TOUCHE, egui::Button::new("DEL")).clicked() {
                self.delete_char();
            }
            self.touche(ui, '/');
        });

        for rangee in [['7', '8', '9', '*'], ['4', '5', '6', '-'], ['1', '2', '3', '+']] {
            ui.horizontal(|ui| {
                for c in rangee {
                    self.touche(ui, c);
                }
            });
        }

        ui.horizontal(|ui| {
            if ui.add_sized(large, egui::Button::new("0")).clicked() {
                self.append_char('0');
            }
            self.touche(ui, '.');
            if ui.add_sized(TAILLE_TOUCHE, egui::Button::new("=")).clicked() {
                self.calculer(maintenant);
            }
        });
    }

    fn touche(&mut self, ui: &mut egui::Ui, c: char) {
        if ui
            .add_sized(TAILLE_TOUCHE, egui::Button::new(c.to_string()))
            .clicked()
        {
            self.append_char(c);
        }
    }

    fn ui_clavier(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        let (texte, enter, backspace) = ui.input(|i| {
            let mut texte = String::new();
            for ev in &i.events {
                if let egui::Event::Text(t) = ev {
                    texte.push_str(t);
                }
            }
            (
                texte,
                i.key_pressed(egui::Key::Enter),
                i.key_pressed(egui::Key::Backspace),
            )
        });

        for c in texte.chars().filter(|c| SAISIE_CLAVIER.contains(*c)) {
            self.append_char(c);
        }
        if texte.contains('=') || enter {
            self.calculer(maintenant);
        }
        if backspace {
            self.delete_char();
        }
    }
}
