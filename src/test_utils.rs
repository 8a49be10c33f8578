use crate::models::domain::{Question, Subject};

#[cfg(test)]
pub mod fixtures {
    use super::*;

    pub const SAMPLE_URL: &str = "http://quiz.test/questions.json";

    fn choices(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    /// Three questions, correct answers at indices 1, 0, 2
    pub fn science_subject() -> Subject {
        Subject::new(
            "Science",
            "Because SCIENCE!",
            vec![
                Question::new(
                    "What is fire?",
                    choices(&["One of the four classical elements", "A magical reaction", "A band"]),
                    1,
                ),
                Question::new("What is H2O?", choices(&["Water", "Salt", "Sand", "Air"]), 0),
                Question::new("How many planets?", choices(&["7", "9", "8"]), 2),
            ],
        )
    }

    /// A single question whose first choice is correct
    pub fn marvel_subject() -> Subject {
        Subject::new(
            "Marvel",
            "Avengers, Assemble!",
            vec![Question::new(
                "Who is Iron Man?",
                choices(&["Tony Stark", "Obadiah Stane", "A rock hit by Megadeth", "Nobody"]),
                0,
            )],
        )
    }

    /// Wire-format payload with Mathematics, Marvel and Science
    pub fn sample_payload_json() -> String {
        r#"[
  {"title":"Mathematics","desc":"Did you pass the third grade?","questions":[
    {"text":"What is 2+2?","answer":"1","answers":["4","22","An irrational number","Nobody knows"]}]},
  {"title":"Marvel Super Heroes","desc":"Avengers, Assemble!","questions":[
    {"text":"Who is Iron Man?","answer":"1","answers":["Tony Stark","Obadiah Stane","A rock hit by Megadeth","Nobody knows"]},
    {"text":"Who founded the X-Men?","answer":"2","answers":["Tony Stark","Professor X","The X-Institute","Erik Lensherr"]}]},
  {"title":"Science","desc":"Because SCIENCE!","questions":[
    {"text":"What is fire?","answer":"1","answers":["One of the four classical elements","A magical reaction given to us by God","A band that hasn't yet been discovered","Fire! Fire! Fire! heh-heh"]}]}
]"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::dto::decode_payload;

    #[test]
    fn test_fixtures_science_subject() {
        let subject = science_subject();
        assert_eq!(subject.title, "Science");
        assert_eq!(subject.question_count(), 3);
    }

    #[test]
    fn test_fixtures_marvel_subject() {
        let subject = marvel_subject();
        assert_eq!(subject.question_count(), 1);
        assert_eq!(subject.questions[0].correct_index, 0);
    }

    #[test]
    fn test_fixtures_sample_payload_decodes() {
        let subjects = decode_payload(&sample_payload_json()).expect("fixture should decode");
        assert_eq!(subjects.len(), 3);
        assert_eq!(subjects[1].questions[1].correct_index, 1);
    }
}
