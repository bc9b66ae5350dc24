// src/app/vue.rs
//
// Vue (UI egui): natif + web
// ---------------------------
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le champ est focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
//
// Note : PAS de Key::NumEnter (n’existe pas dans egui 0.33.x)

use eframe::egui;

use calculatrice_sci::noyau::etat::PRECISION_MAX;

use super::etat::AppCalc;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice scientifique");
                ui.add_space(6.0);

                self.ui_ecran(ui);
                ui.add_space(6.0);
                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_reglages(ui);
                ui.add_space(6.0);
                self.ui_fonctions(ui);
                ui.add_space(8.0);
                self.ui_pave_numerique(ui);

                ui.add_space(8.0);
                egui::CollapsingHeader::new("Jetons")
                    .default_open(false)
                    .show(ui, |ui| {
                        Self::champ_monospace(ui, "jetons_out", &self.jetons, 2);
                    });
            });
    }

    /// Écran : dernière expression, résultat, ligne d’erreur.
    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.small(self.mode_angle());
                    if self.session.memory != 0.0 {
                        ui.small("M");
                    }
                    ui.small(self.session.last_expression());
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    ui.label(egui::RichText::new(&self.affichage).monospace().size(28.0));
                });
                if !self.erreur.is_empty() {
                    ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
                }
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 2*sin(30) + sqrt(16), root(27, 3), ncr(5, 2)")
                .id_salt("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.evaluer_entree();
        }
    }

    fn ui_reglages(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            let mut degres = self.session.angle_in_degrees;
            ui.selectable_value(&mut degres, true, "DEG");
            ui.selectable_value(&mut degres, false, "RAD");
            if degres != self.session.angle_in_degrees {
                self.basculer_angle();
            }

            ui.separator();

            self.bouton_action(ui, "MC", "Efface la mémoire", Action::MemoireClear);
            self.bouton_action(ui, "MR", "Rappelle la mémoire", Action::MemoireRecall);
            self.bouton_action(ui, "MS", "Mémorise le dernier résultat", Action::MemoireStore);
            self.bouton_action(ui, "M+", "Ajoute le dernier résultat", Action::MemoireAdd);
            self.bouton_action(ui, "M−", "Retranche le dernier résultat", Action::MemoireSubtract);

            ui.separator();

            ui.label("Précision :");
            let mut p = self.session.precision as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut p)
                    .speed(1)
                    .range(1..=PRECISION_MAX as u32)
                    .suffix(" chiffres"),
            );
            if resp.changed() {
                self.set_precision(p as usize);
            }
        });
    }

    fn ui_fonctions(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            for f in ["sin", "cos", "tan", "asin", "acos", "atan"] {
                self.bouton_fonction(ui, f);
            }
        });
        ui.horizontal_wrapped(|ui| {
            for f in ["sinh", "cosh", "tanh", "log", "ln", "sqrt", "factorial"] {
                self.bouton_fonction(ui, f);
            }
        });
        ui.horizontal_wrapped(|ui| {
            self.bouton_insert(ui, "π", "π");
            self.bouton_insert(ui, "e", "e");
            self.bouton_insert(ui, "φ", "φ");
            self.bouton_insert(ui, "ans", "ans");
            self.bouton_insert(ui, "x^y", "^");
            self.bouton_insert(ui, "mod", "%");
            self.bouton_insert(ui, ",", ", ");
        });
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique_sci")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_insert(ui, "7", "7");
                self.bouton_insert(ui, "8", "8");
                self.bouton_insert(ui, "9", "9");
                self.bouton_action(ui, "DEL", "Efface le dernier caractère", Action::Backspace);
                self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);
                ui.end_row();

                self.bouton_insert(ui, "4", "4");
                self.bouton_insert(ui, "5", "5");
                self.bouton_insert(ui, "6", "6");
                self.bouton_insert(ui, "*", "*");
                self.bouton_insert(ui, "/", "/");
                ui.end_row();

                self.bouton_insert(ui, "1", "1");
                self.bouton_insert(ui, "2", "2");
                self.bouton_insert(ui, "3", "3");
                self.bouton_insert(ui, "+", "+");
                self.bouton_insert(ui, "-", "-");
                ui.end_row();

                self.bouton_insert(ui, "0", "0");
                self.bouton_insert(ui, ".", ".");
                self.bouton_insert(ui, "(", "(");
                self.bouton_insert(ui, ")", ")");
                self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
                ui.end_row();
            });

        ui.add_space(6.0);
        let eq = ui.add_sized([ui.available_width(), 36.0], egui::Button::new("="));
        if eq.clicked() {
            self.evaluer_entree();
        }
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([52.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => {
                    self.entree.pop();
                }
                Action::MemoireStore => self.memoire_store(),
                Action::MemoireAdd => self.memoire_add(),
                Action::MemoireSubtract => self.memoire_subtract(),
                Action::MemoireRecall => self.memoire_recall(),
                Action::MemoireClear => self.memoire_clear(),
            }
            self.focus_entree = true;
        }
    }

    fn bouton_fonction(&mut self, ui: &mut egui::Ui, nom: &str) {
        let resp = ui.add_sized([56.0, 28.0], egui::Button::new(nom));
        if resp.clicked() {
            self.entree.push_str(nom);
            self.entree.push('(');
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, to_insert: &str) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(label));
        if resp.clicked() {
            self.entree.push_str(to_insert);
            self.focus_entree = true;
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ResetTotal,
    Backspace,
    MemoireStore,
    MemoireAdd,
    MemoireSubtract,
    MemoireRecall,
    MemoireClear,
}
