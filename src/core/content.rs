/// Precomposed informational panel content, keyed by the trigger's
/// data-modal value. Static strings only; the wiring layer injects them.
pub struct ModalEntry {
    pub title: &'static str,
    pub body: &'static str,
}

pub const MODAL_KEYS: [&str; 6] = [
    "fully-detailed",
    "divinely-preserved",
    "only-authority",
    "adultery-punishment",
    "apostasy-penalty",
    "prophet-magic",
];

pub fn modal_entry(key: &str) -> Option<ModalEntry> {
    let e = match key {
        "fully-detailed" => ModalEntry {
            title: "The Qur'an is Fully Detailed",
            body: r##"<div class="modal-section">
  <h3>Divine Completeness</h3>
  <p>The Qur'an describes itself as a complete and detailed book, requiring no external sources for religious guidance.</p>
  <blockquote class="modal-quote">"A Book whose verses have been perfected and then detailed from [one who is] Wise and Acquainted."<cite>— Qur'an 11:1</cite></blockquote>
  <ul class="modal-list">
    <li><strong>Complete Guidance:</strong> "We have not neglected in the Book a thing" (6:38)</li>
    <li><strong>Detailed Explanation:</strong> "We have explained everything in detail" (17:12)</li>
    <li><strong>Perfect Completion:</strong> "Today I have perfected your religion for you" (5:3)</li>
  </ul>
  <p><a href="#beliefs" class="modal-link">Read the full discussion</a></p>
</div>"##,
        },
        "divinely-preserved" => ModalEntry {
            title: "Divine Preservation Guarantee",
            body: r##"<div class="modal-section">
  <h3>A Promise of Protection</h3>
  <p>Unlike any other religious text, the Qur'an comes with a divine guarantee of preservation.</p>
  <blockquote class="modal-quote">"Indeed, it is We who sent down the Reminder and indeed, We will be its guardian."<cite>— Qur'an 15:9</cite></blockquote>
  <div class="comparison-table">
    <div class="comparison-row"><div class="comparison-label">Qur'an</div><div class="comparison-value success">Divinely Protected</div></div>
    <div class="comparison-row"><div class="comparison-label">Hadith</div><div class="comparison-value error">Human Transmission</div></div>
    <div class="comparison-row"><div class="comparison-label">Scholarly Opinions</div><div class="comparison-value error">Human Interpretation</div></div>
  </div>
  <p><a href="#beliefs" class="modal-link">Read the full discussion</a></p>
</div>"##,
        },
        "only-authority" => ModalEntry {
            title: "The Qur'an as Sole Authority",
            body: r##"<div class="modal-section">
  <h3>Divine Judgment and Authority</h3>
  <p>The Qur'an establishes itself as the only source of religious authority.</p>
  <blockquote class="modal-quote">"Shall I seek other than Allah as a judge, when He has sent down to you the Book explained in detail?"<cite>— Qur'an 6:114</cite></blockquote>
  <ul class="modal-list">
    <li><strong>No Other Judge:</strong> judgment belongs to what has been revealed (5:44)</li>
    <li><strong>Complete Authority:</strong> the Book confirms and supersedes earlier scripture (5:48)</li>
  </ul>
  <p><a href="#beliefs" class="modal-link">Read the full discussion</a></p>
</div>"##,
        },
        "adultery-punishment" => ModalEntry {
            title: "Adultery Punishment: Qur'an vs Hadith",
            body: r##"<div class="modal-section">
  <h3>A Clear Contradiction in Punishment</h3>
  <div class="contradiction-display">
    <div class="source-item quran-source">
      <h4>Qur'an (Divine Source)</h4>
      <blockquote>"The woman and the man guilty of adultery or fornication - flog each of them with a hundred stripes."<cite>— Qur'an 24:2</cite></blockquote>
    </div>
    <div class="source-item hadith-source">
      <h4>Hadith (Human Source)</h4>
      <blockquote>Prescribes stoning to death for the married, a punishment the Qur'an never names.<cite>— Sahih Muslim</cite></blockquote>
    </div>
  </div>
  <p>Two sources, two different punishments: they cannot both carry divine authority.</p>
  <p><a href="#contradictions" class="modal-link">See the full comparison</a></p>
</div>"##,
        },
        "apostasy-penalty" => ModalEntry {
            title: "Apostasy: Freedom vs Compulsion",
            body: r##"<div class="modal-section">
  <h3>Religious Freedom</h3>
  <div class="contradiction-display">
    <div class="source-item quran-source">
      <h4>Qur'an: No Compulsion</h4>
      <blockquote>"There shall be no compulsion in religion."<cite>— Qur'an 2:256</cite></blockquote>
    </div>
    <div class="source-item hadith-source">
      <h4>Hadith: Death for Apostasy</h4>
      <blockquote>"Whoever changed his Islamic religion, then kill him."<cite>— Sahih Bukhari</cite></blockquote>
    </div>
  </div>
  <p>The Qur'an affirms the right to believe or disbelieve and names consequences only in the afterlife.</p>
  <p><a href="#contradictions" class="modal-link">See the full comparison</a></p>
</div>"##,
        },
        "prophet-magic" => ModalEntry {
            title: "The Prophet and Magic: Qur'an vs Hadith",
            body: r##"<div class="modal-section">
  <h3>An Attack on the Prophet's Character</h3>
  <div class="contradiction-display">
    <div class="source-item quran-source">
      <h4>Qur'an Defends the Prophet</h4>
      <blockquote>"And the wrongdoers say, 'You follow not but a man affected by magic.'"<cite>— Qur'an 17:47</cite></blockquote>
      <p>Presented as a <strong>false accusation</strong> by the Prophet's enemies.</p>
    </div>
    <div class="source-item hadith-source">
      <h4>Hadith Claims Magic Worked</h4>
      <blockquote>Reports that magic made the Prophet believe he had done things he had not.<cite>— Sahih Bukhari</cite></blockquote>
    </div>
  </div>
  <p>The hadith validates the very accusation the Qur'an refutes.</p>
  <p><a href="#contradictions" class="modal-link">See the full comparison</a></p>
</div>"##,
        },
        _ => return None,
    };
    Some(e)
}
